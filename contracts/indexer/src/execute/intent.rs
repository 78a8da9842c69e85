use std::cmp::Ordering;

use const_format::concatcp;
use cosmwasm_std::{Addr, DepsMut, Env, Event, MessageInfo, Response, Storage, Uint128};

use beacon::{
    asset::AssetInfo,
    helper::{build_transfer_cw20_from_user_msg, build_transfer_cw20_token_msg, EventExt},
    indexer::Config,
    locator_whitelist,
};

use crate::{
    contract::{ContractResult, CONTRACT_NAME},
    error::ContractError,
    index,
    state::CONFIG,
};

use super::{ensure_not_paused, ensure_owner, ensure_pair_not_blacklisted, load_index, save_index};

/// Publishes the sender's locator for a pair, staking `amount` as its score.
///
/// Custody is reconciled against the sender's previous stake for the pair: an increase is
/// pulled from the sender's allowance and a decrease is refunded, so the contract always holds
/// exactly the recorded score. The entry is written even when `amount` is zero.
pub fn set_intent(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    signer_asset: AssetInfo,
    sender_asset: AssetInfo,
    amount: Uint128,
    locator: String,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_paused(&config)?;

    let mut index = load_index(deps.storage, &signer_asset, &sender_asset)?;

    if locator.is_empty() {
        return Err(ContractError::EmptyLocator);
    }

    if let Some(whitelist) = &config.locator_whitelist {
        let whitelisted: bool = deps.querier.query_wasm_smart(
            whitelist,
            &locator_whitelist::QueryMsg::Has {
                locator: locator.clone(),
            },
        )?;
        if !whitelisted {
            return Err(ContractError::LocatorNotWhitelisted { locator });
        }
    }

    ensure_pair_not_blacklisted(deps.storage, &signer_asset, &sender_asset)?;

    let previous =
        index::set_locator(deps.storage, &mut index, &info.sender, amount, locator.clone())?;
    save_index(deps.storage, &index)?;

    let previous_amount = previous.map(|record| record.score).unwrap_or_default();

    let mut response = Response::new();
    match amount.cmp(&previous_amount) {
        Ordering::Greater => {
            response = response.add_message(build_transfer_cw20_from_user_msg(
                config.staking_token.to_string(),
                info.sender.to_string(),
                env.contract.address.to_string(),
                amount.checked_sub(previous_amount)?,
            )?);
        }
        Ordering::Less => {
            response = response.add_message(build_transfer_cw20_token_msg(
                info.sender.clone(),
                config.staking_token.to_string(),
                previous_amount.checked_sub(amount)?,
            )?);
        }
        Ordering::Equal => {}
    }

    let event = Event::from_info(concatcp!(CONTRACT_NAME, "::set_intent"), &info)
        .add_attribute("signer_asset", signer_asset.to_string())
        .add_attribute("sender_asset", sender_asset.to_string())
        .add_attribute("amount", amount)
        .add_attribute("previous_amount", previous_amount)
        .add_attribute("locator", locator)
        .add_attribute("index_length", index.length.to_string());

    Ok(response.add_event(event))
}

/// Removes the sender's locator from a pair and returns its stake.
/// Works on blacklisted pairs too.
pub fn unset_intent(
    deps: DepsMut,
    info: MessageInfo,
    signer_asset: AssetInfo,
    sender_asset: AssetInfo,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_paused(&config)?;

    let user = info.sender.clone();
    let (response, score) =
        remove_intent(deps.storage, &config, &user, &signer_asset, &sender_asset)?;

    let event = Event::from_info(concatcp!(CONTRACT_NAME, "::unset_intent"), &info)
        .add_attribute("signer_asset", signer_asset.to_string())
        .add_attribute("sender_asset", sender_asset.to_string())
        .add_attribute("amount", score);

    Ok(response.add_event(event))
}

/// Owner only counterpart of [`unset_intent`]. Not subject to the pause guard so that stakes
/// can be returned while the contract is paused.
pub fn unset_intent_for_user(
    deps: DepsMut,
    info: MessageInfo,
    user: Addr,
    signer_asset: AssetInfo,
    sender_asset: AssetInfo,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let user = deps.api.addr_validate(user.as_str())?;
    let (response, score) =
        remove_intent(deps.storage, &config, &user, &signer_asset, &sender_asset)?;

    let event = Event::from_info(concatcp!(CONTRACT_NAME, "::unset_intent_for_user"), &info)
        .add_attribute("user", user)
        .add_attribute("signer_asset", signer_asset.to_string())
        .add_attribute("sender_asset", sender_asset.to_string())
        .add_attribute("amount", score);

    Ok(response.add_event(event))
}

fn remove_intent(
    store: &mut dyn Storage,
    config: &Config,
    user: &Addr,
    signer_asset: &AssetInfo,
    sender_asset: &AssetInfo,
) -> ContractResult<(Response, Uint128)> {
    let mut index = load_index(store, signer_asset, sender_asset)?;
    let record = index::unset_locator(store, &mut index, user)?;
    save_index(store, &index)?;

    let mut response = Response::new();
    if !record.score.is_zero() {
        response = response.add_message(build_transfer_cw20_token_msg(
            user.clone(),
            config.staking_token.to_string(),
            record.score,
        )?);
    }

    Ok((response, record.score))
}
