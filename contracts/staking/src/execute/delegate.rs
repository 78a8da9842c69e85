use const_format::concatcp;
use cosmwasm_std::{Addr, DepsMut, Event, MessageInfo, Response};

use beacon::helper::EventExt;

use crate::{
    contract::{ContractResult, CONTRACT_NAME},
    error::ContractError,
    state::{DELEGATE_OF, PRINCIPAL_OF, STAKES},
};

/// Registers `account` as the delegate of the sender.
///
/// Delegation is one to one: a principal has at most one delegate and a delegate serves at most
/// one principal, and delegations never chain. Neither side may hold a stake when the delegate is
/// registered.
pub fn add_delegate(deps: DepsMut, info: MessageInfo, account: Addr) -> ContractResult<Response> {
    let account = deps.api.addr_validate(account.as_str())?;
    let principal = info.sender.clone();

    if account == principal {
        return Err(ContractError::InvalidDelegate);
    }
    if PRINCIPAL_OF.has(deps.storage, &principal) {
        return Err(ContractError::SenderHasDelegate);
    }
    if DELEGATE_OF.has(deps.storage, &principal) {
        return Err(ContractError::SenderIsDelegate);
    }
    let principal_staked = STAKES
        .may_load(deps.storage, &principal)?
        .map(|record| record.balance)
        .unwrap_or_default();
    if !principal_staked.is_zero() {
        return Err(ContractError::PrincipalMustNotBeStaked);
    }
    if DELEGATE_OF.has(deps.storage, &account) {
        return Err(ContractError::DelegateTaken {
            account: account.to_string(),
        });
    }
    if PRINCIPAL_OF.has(deps.storage, &account) {
        return Err(ContractError::DelegateIsPrincipal {
            account: account.to_string(),
        });
    }
    let staked = STAKES
        .may_load(deps.storage, &account)?
        .map(|record| record.balance)
        .unwrap_or_default();
    if !staked.is_zero() {
        return Err(ContractError::DelegateMustNotBeStaked {
            account: account.to_string(),
        });
    }

    PRINCIPAL_OF.save(deps.storage, &principal, &account)?;
    DELEGATE_OF.save(deps.storage, &account, &principal)?;

    let event = Event::from_info(concatcp!(CONTRACT_NAME, "::add_delegate"), &info)
        .add_attribute("principal", principal)
        .add_attribute("delegate", account);

    Ok(Response::new().add_event(event))
}

/// Unregisters the sender's delegate.
pub fn remove_delegate(
    deps: DepsMut,
    info: MessageInfo,
    account: Addr,
) -> ContractResult<Response> {
    let principal = info.sender.clone();

    match PRINCIPAL_OF.may_load(deps.storage, &principal)? {
        Some(delegate) if delegate == account => {}
        _ => {
            return Err(ContractError::DelegateNotFound {
                account: account.to_string(),
            })
        }
    }

    PRINCIPAL_OF.remove(deps.storage, &principal);
    DELEGATE_OF.remove(deps.storage, &account);

    let event = Event::from_info(concatcp!(CONTRACT_NAME, "::remove_delegate"), &info)
        .add_attribute("principal", principal)
        .add_attribute("delegate", account);

    Ok(Response::new().add_event(event))
}
