use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};
use beacon::{
    helper::OwnershipProposal,
    indexer::{Config, IndexInfo},
};

// Global config of the contract
pub const CONFIG: Item<Config> = Item::new("config");

/// Ownership proposal in case of ownership transfer is initiated
pub const OWNERSHIP_PROPOSAL: Item<OwnershipProposal> = Item::new("ownership_proposal");

/// Map between (signer asset, sender asset) and the index of the pair.
/// Indexes are created lazily and never removed.
pub const INDEXES: Map<(&str, &str), IndexInfo> = Map::new("indexes");

/// Assets for which no new intents can be set
pub const BLACKLIST: Map<&str, bool> = Map::new("blacklist");

/// Locator set by an account in an index, keyed by (index id, account)
pub const LOCATORS: Map<(u64, &Addr), LocatorRecord> = Map::new("locators");

/// Ranking of the locators of an index, keyed by (index id, inverted score, nonce).
/// Ascending iteration walks an index by descending score, oldest write first among equal scores.
pub const RANKING: Map<(u64, u128, u64), Addr> = Map::new("ranking");

/// Counter handing out index ids
pub const NEXT_INDEX_ID: Item<u64> = Item::new("next_index_id");

/// Counter ordering locator writes, used to break score ties in the ranking
pub const NEXT_LOCATOR_NONCE: Item<u64> = Item::new("next_locator_nonce");

#[cw_serde]
pub struct LocatorRecord {
    pub score: Uint128,
    pub locator: String,
    /// Write order of the record among all locators of the contract
    pub nonce: u64,
}

pub fn next_index_id(store: &mut dyn Storage) -> StdResult<u64> {
    let id = NEXT_INDEX_ID.may_load(store)?.unwrap_or_default() + 1;
    NEXT_INDEX_ID.save(store, &id)?;
    Ok(id)
}

pub fn next_locator_nonce(store: &mut dyn Storage) -> StdResult<u64> {
    let nonce = NEXT_LOCATOR_NONCE.may_load(store)?.unwrap_or_default() + 1;
    NEXT_LOCATOR_NONCE.save(store, &nonce)?;
    Ok(nonce)
}
