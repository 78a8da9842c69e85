use cosmwasm_std::{Addr, Storage};
use beacon::{
    asset::{pair_key, AssetInfo},
    indexer::{Config, IndexInfo},
};

use crate::{
    contract::ContractResult,
    error::ContractError,
    state::{BLACKLIST, INDEXES},
};

pub mod intent;

pub fn ensure_owner(config: &Config, sender: &Addr) -> ContractResult<()> {
    if *sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Pause guard. Each entry point opts in explicitly, the owner unstake path doesn't.
pub fn ensure_not_paused(config: &Config) -> ContractResult<()> {
    if config.paused {
        return Err(ContractError::ContractPaused);
    }
    Ok(())
}

pub fn is_blacklisted(store: &dyn Storage, asset: &AssetInfo) -> bool {
    BLACKLIST.has(store, &asset.as_string())
}

pub fn ensure_pair_not_blacklisted(
    store: &dyn Storage,
    signer_asset: &AssetInfo,
    sender_asset: &AssetInfo,
) -> ContractResult<()> {
    if is_blacklisted(store, signer_asset) || is_blacklisted(store, sender_asset) {
        return Err(ContractError::PairIsBlacklisted {
            signer_asset: signer_asset.to_string(),
            sender_asset: sender_asset.to_string(),
        });
    }
    Ok(())
}

pub fn load_index(
    store: &dyn Storage,
    signer_asset: &AssetInfo,
    sender_asset: &AssetInfo,
) -> ContractResult<IndexInfo> {
    let (signer_key, sender_key) = pair_key(signer_asset, sender_asset);
    INDEXES
        .may_load(store, (&signer_key, &sender_key))?
        .ok_or_else(|| ContractError::IndexDoesNotExist {
            signer_asset: signer_asset.to_string(),
            sender_asset: sender_asset.to_string(),
        })
}

pub fn save_index(store: &mut dyn Storage, index: &IndexInfo) -> ContractResult<()> {
    let (signer_key, sender_key) = pair_key(&index.signer_asset, &index.sender_asset);
    INDEXES.save(store, (&signer_key, &sender_key), index)?;
    Ok(())
}
