#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use const_format::concatcp;
use cosmwasm_std::{
    to_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response, StdError, Storage,
};
use cw2::{get_contract_version, set_contract_version};

use beacon::{
    helper::{claim_ownership, drop_ownership_proposal, propose_new_owner, EventExt},
    locator_whitelist::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
};

use crate::{
    error::ContractError,
    state::{LOCATORS, OWNER, OWNERSHIP_PROPOSAL},
};

/// Contract name that is used for migration.
pub const CONTRACT_NAME: &str = "beacon-locator-whitelist";
/// Contract version that is used for migration.
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub type ContractResult<T> = Result<T, ContractError>;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(msg.owner.as_str())?;
    OWNER.save(deps.storage, &owner)?;

    let added = add_locators(deps.storage, &msg.locators)?;

    Ok(Response::new().add_event(
        Event::from_info(concatcp!(CONTRACT_NAME, "::instantiate"), &info)
            .add_attribute("owner", owner)
            .add_attribute("locators", added.join(",")),
    ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    match msg {
        ExecuteMsg::AddLocators { locators } => {
            ensure_owner(deps.storage, &info)?;
            let added = add_locators(deps.storage, &locators)?;

            Ok(Response::new().add_event(
                Event::from_info(concatcp!(CONTRACT_NAME, "::add_locators"), &info)
                    .add_attribute("locators", added.join(",")),
            ))
        }
        ExecuteMsg::RemoveLocators { locators } => {
            ensure_owner(deps.storage, &info)?;

            let mut removed = vec![];
            for locator in locators {
                if LOCATORS.has(deps.storage, &locator) {
                    LOCATORS.remove(deps.storage, &locator);
                    removed.push(locator);
                }
            }

            Ok(Response::new().add_event(
                Event::from_info(concatcp!(CONTRACT_NAME, "::remove_locators"), &info)
                    .add_attribute("locators", removed.join(",")),
            ))
        }
        ExecuteMsg::ProposeNewOwner { owner, expires_in } => {
            let current_owner = OWNER.load(deps.storage)?;
            propose_new_owner(
                deps,
                info,
                env,
                owner.to_string(),
                expires_in,
                current_owner,
                OWNERSHIP_PROPOSAL,
                CONTRACT_NAME,
            )
            .map_err(|e| e.into())
        }
        ExecuteMsg::DropOwnershipProposal {} => {
            let current_owner = OWNER.load(deps.storage)?;
            drop_ownership_proposal(deps, info, current_owner, OWNERSHIP_PROPOSAL, CONTRACT_NAME)
                .map_err(|e| e.into())
        }
        ExecuteMsg::ClaimOwnership {} => claim_ownership(
            deps,
            info,
            env,
            OWNERSHIP_PROPOSAL,
            |deps, new_owner| OWNER.save(deps.storage, &new_owner),
            CONTRACT_NAME,
        )
        .map_err(|e| e.into()),
    }
}

fn ensure_owner(store: &dyn Storage, info: &MessageInfo) -> ContractResult<()> {
    if info.sender != OWNER.load(store)? {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Adds the locators not yet whitelisted and returns them.
fn add_locators(store: &mut dyn Storage, locators: &[String]) -> ContractResult<Vec<String>> {
    let mut added = vec![];
    for locator in locators {
        if locator.is_empty() {
            return Err(ContractError::EmptyLocator);
        }
        if !LOCATORS.has(store, locator) {
            LOCATORS.save(store, locator, &true)?;
            added.push(locator.clone());
        }
    }
    Ok(added)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    match msg {
        QueryMsg::Has { locator } => {
            to_binary(&LOCATORS.has(deps.storage, &locator)).map_err(ContractError::from)
        }
        QueryMsg::Owner {} => to_binary(&OWNER.load(deps.storage)?).map_err(ContractError::from),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> ContractResult<Response> {
    let contract_version = get_contract_version(deps.storage)?;

    if contract_version.contract != CONTRACT_NAME {
        return Err(StdError::generic_err(format!(
            "Can't migrate from {} to {}",
            contract_version.contract, CONTRACT_NAME
        ))
        .into());
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
