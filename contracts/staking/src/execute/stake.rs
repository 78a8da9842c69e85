use const_format::concatcp;
use cosmwasm_std::{Addr, DepsMut, Env, Event, MessageInfo, Response, Storage, Uint128};

use beacon::helper::{build_transfer_cw20_token_msg, EventExt};

use crate::{
    contract::{ContractResult, CONTRACT_NAME},
    error::ContractError,
    state::{CONFIG, DELEGATE_OF, STAKES, TOTAL_SUPPLY},
    vesting,
};

/// Account credited when `sender` stakes for itself: its principal if `sender` is a
/// registered delegate, `sender` otherwise.
pub fn resolve_beneficiary(store: &dyn Storage, sender: &Addr) -> ContractResult<Addr> {
    Ok(DELEGATE_OF
        .may_load(store, sender)?
        .unwrap_or_else(|| sender.clone()))
}

/// Credits `amount` to the stake of `beneficiary`, re-anchoring its vesting.
/// The caller is responsible for the tokens actually reaching the contract.
pub fn stake(
    deps: DepsMut,
    env: Env,
    sender: Addr,
    beneficiary: Addr,
    amount: Uint128,
) -> ContractResult<Response> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let config = CONFIG.load(deps.storage)?;
    let record = STAKES
        .may_load(deps.storage, &beneficiary)?
        .unwrap_or_default();

    let updated = vesting::deposit(
        &record,
        amount,
        env.block.time.seconds(),
        config.vesting_length,
    )?;
    STAKES.save(deps.storage, &beneficiary, &updated)?;

    let total_supply = TOTAL_SUPPLY
        .may_load(deps.storage)?
        .unwrap_or_default()
        .checked_add(amount)?;
    TOTAL_SUPPLY.save(deps.storage, &total_supply)?;

    // even though the msg sender might be the cw20 contract,
    // in the event, we are only concerned with the actual human sender
    let event = Event::from_sender(concatcp!(CONTRACT_NAME, "::stake"), sender)
        .add_attribute("account", beneficiary)
        .add_attribute("amount", amount)
        .add_attribute("balance", updated.balance)
        .add_attribute("timestamp", updated.timestamp.to_string())
        .add_attribute("duration", updated.duration.to_string())
        .add_attribute("total_supply", total_supply);

    Ok(Response::new().add_event(event))
}

/// Withdraws `amount` of the sender's vested stake.
/// Only the balance shrinks, the vesting anchor and duration stay as they are.
pub fn unstake(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> ContractResult<Response> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let config = CONFIG.load(deps.storage)?;
    let mut record = STAKES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();

    let available = vesting::available(&record, env.block.time.seconds());
    if amount > available {
        return Err(ContractError::AmountExceedsAvailable {
            available,
            requested: amount,
        });
    }

    record.balance = record.balance.checked_sub(amount)?;
    STAKES.save(deps.storage, &info.sender, &record)?;

    let total_supply = TOTAL_SUPPLY
        .may_load(deps.storage)?
        .unwrap_or_default()
        .checked_sub(amount)?;
    TOTAL_SUPPLY.save(deps.storage, &total_supply)?;

    let transfer_msg =
        build_transfer_cw20_token_msg(info.sender.clone(), config.token.to_string(), amount)?;

    let event = Event::from_info(concatcp!(CONTRACT_NAME, "::unstake"), &info)
        .add_attribute("amount", amount)
        .add_attribute("balance", record.balance)
        .add_attribute("total_supply", total_supply);

    Ok(Response::new().add_message(transfer_msg).add_event(event))
}
