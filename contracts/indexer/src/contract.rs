#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use const_format::concatcp;
use cosmwasm_std::{
    to_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response, StdError,
    StdResult,
};
use cw2::{get_contract_version, set_contract_version};

use beacon::{
    asset::{pair_key, AssetInfo},
    helper::{claim_ownership, drop_ownership_proposal, propose_new_owner, EventExt},
    indexer::{Config, ExecuteMsg, IndexInfo, InstantiateMsg, LocatorEntry, MigrateMsg, QueryMsg},
    DEFAULT_LIMIT, MAX_LIMIT,
};

use crate::{
    error::ContractError,
    execute::{
        ensure_owner, ensure_not_paused, intent::{set_intent, unset_intent, unset_intent_for_user},
        is_blacklisted, load_index,
    },
    index,
    state::{next_index_id, BLACKLIST, CONFIG, INDEXES, OWNERSHIP_PROPOSAL},
};

/// Contract name that is used for migration.
pub const CONTRACT_NAME: &str = "beacon-indexer";
/// Contract version that is used for migration.
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub type ContractResult<T> = Result<T, ContractError>;

// ----------------x----------------x----------------x----------------x----------------x----------------
// ----------------x----------------x      Instantiate Contract : Execute function     x----------------
// ----------------x----------------x----------------x----------------x----------------x----------------

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let locator_whitelist = msg
        .locator_whitelist
        .map(|addr| deps.api.addr_validate(addr.as_str()))
        .transpose()?;

    let config = Config {
        owner: deps.api.addr_validate(msg.owner.as_str())?,
        staking_token: deps.api.addr_validate(msg.staking_token.as_str())?,
        locator_whitelist,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    let mut event = Event::from_info(concatcp!(CONTRACT_NAME, "::instantiate"), &info)
        .add_attribute("owner", config.owner.to_string())
        .add_attribute("staking_token", config.staking_token.to_string());
    if let Some(whitelist) = &config.locator_whitelist {
        event = event.add_attribute("locator_whitelist", whitelist.to_string());
    }

    Ok(Response::new().add_event(event))
}

// ----------------x----------------x----------------x------------------x----------------x----------------
// ----------------x----------------x  Execute function :: Entry Point  x----------------x----------------
// ----------------x----------------x----------------x------------------x----------------x----------------

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    match msg {
        ExecuteMsg::SetLocatorWhitelist { new_whitelist } => {
            set_locator_whitelist(deps, info, new_whitelist)
        }
        ExecuteMsg::CreateIndex {
            signer_asset,
            sender_asset,
        } => create_index(deps, env, info, signer_asset, sender_asset),
        ExecuteMsg::AddToBlacklist { asset } => add_to_blacklist(deps, info, asset),
        ExecuteMsg::RemoveFromBlacklist { asset } => remove_from_blacklist(deps, info, asset),
        ExecuteMsg::SetIntent {
            signer_asset,
            sender_asset,
            amount,
            locator,
        } => set_intent(deps, env, info, signer_asset, sender_asset, amount, locator),
        ExecuteMsg::UnsetIntent {
            signer_asset,
            sender_asset,
        } => unset_intent(deps, info, signer_asset, sender_asset),
        ExecuteMsg::UnsetIntentForUser {
            user,
            signer_asset,
            sender_asset,
        } => unset_intent_for_user(deps, info, user, signer_asset, sender_asset),
        ExecuteMsg::SetPausedStatus { new_status } => set_paused_status(deps, info, new_status),
        ExecuteMsg::ProposeNewOwner { owner, expires_in } => {
            let config = CONFIG.load(deps.storage)?;
            let response = propose_new_owner(
                deps,
                info,
                env,
                owner.to_string(),
                expires_in,
                config.owner,
                OWNERSHIP_PROPOSAL,
                CONTRACT_NAME,
            )?;
            Ok(response)
        }
        ExecuteMsg::DropOwnershipProposal {} => {
            let config: Config = CONFIG.load(deps.storage)?;

            drop_ownership_proposal(deps, info, config.owner, OWNERSHIP_PROPOSAL, CONTRACT_NAME)
                .map_err(|e| e.into())
        }
        ExecuteMsg::ClaimOwnership {} => claim_ownership(
            deps,
            info,
            env,
            OWNERSHIP_PROPOSAL,
            |deps, new_owner| {
                CONFIG.update::<_, StdError>(deps.storage, |mut v| {
                    v.owner = new_owner;
                    Ok(v)
                })?;

                Ok(())
            },
            CONTRACT_NAME,
        )
        .map_err(|e| e.into()),
    }
}

fn set_locator_whitelist(
    deps: DepsMut,
    info: MessageInfo,
    new_whitelist: Option<Addr>,
) -> ContractResult<Response> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.locator_whitelist = new_whitelist
        .map(|addr| deps.api.addr_validate(addr.as_str()))
        .transpose()?;
    CONFIG.save(deps.storage, &config)?;

    let event = Event::from_info(concatcp!(CONTRACT_NAME, "::set_locator_whitelist"), &info)
        .add_attribute(
            "locator_whitelist",
            config
                .locator_whitelist
                .map(|addr| addr.to_string())
                .unwrap_or_default(),
        );

    Ok(Response::new().add_event(event))
}

/// Creates the index of an ordered pair unless it already exists.
/// The (possibly pre-existing) [`IndexInfo`] is returned as response data.
fn create_index(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    signer_asset: AssetInfo,
    sender_asset: AssetInfo,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_paused(&config)?;

    signer_asset.check(deps.api)?;
    sender_asset.check(deps.api)?;

    let (signer_key, sender_key) = pair_key(&signer_asset, &sender_asset);
    if let Some(index) = INDEXES.may_load(deps.storage, (&signer_key, &sender_key))? {
        return Ok(Response::new().set_data(to_binary(&index)?));
    }

    let index = IndexInfo {
        id: next_index_id(deps.storage)?,
        signer_asset,
        sender_asset,
        length: 0,
        created_at: env.block.time.seconds(),
    };
    INDEXES.save(deps.storage, (&signer_key, &sender_key), &index)?;

    let event = Event::from_info(concatcp!(CONTRACT_NAME, "::create_index"), &info)
        .add_attribute("signer_asset", index.signer_asset.to_string())
        .add_attribute("sender_asset", index.sender_asset.to_string())
        .add_attribute("index_id", index.id.to_string());

    Ok(Response::new()
        .set_data(to_binary(&index)?)
        .add_event(event))
}

fn add_to_blacklist(deps: DepsMut, info: MessageInfo, asset: AssetInfo) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    if is_blacklisted(deps.storage, &asset) {
        return Ok(Response::new());
    }
    BLACKLIST.save(deps.storage, &asset.as_string(), &true)?;

    let event = Event::from_info(concatcp!(CONTRACT_NAME, "::add_to_blacklist"), &info)
        .add_attribute("asset", asset.to_string());

    Ok(Response::new().add_event(event))
}

fn remove_from_blacklist(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    if !is_blacklisted(deps.storage, &asset) {
        return Ok(Response::new());
    }
    BLACKLIST.remove(deps.storage, &asset.as_string());

    let event = Event::from_info(concatcp!(CONTRACT_NAME, "::remove_from_blacklist"), &info)
        .add_attribute("asset", asset.to_string());

    Ok(Response::new().add_event(event))
}

fn set_paused_status(deps: DepsMut, info: MessageInfo, new_status: bool) -> ContractResult<Response> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.paused = new_status;
    CONFIG.save(deps.storage, &config)?;

    let event = Event::from_info(concatcp!(CONTRACT_NAME, "::set_paused_status"), &info)
        .add_attribute("paused", new_status.to_string());

    Ok(Response::new().add_event(event))
}

// ----------------x----------------x----------------x----------------x----------------x----------------
// ----------------x----------------x     Query function :: Entry Point      x----------------x---------
// ----------------x----------------x----------------x----------------x----------------x----------------

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    match msg {
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            to_binary(&config).map_err(ContractError::from)
        }
        QueryMsg::Owner {} => {
            let config = CONFIG.load(deps.storage)?;
            to_binary(&config.owner).map_err(ContractError::from)
        }
        QueryMsg::Index {
            signer_asset,
            sender_asset,
        } => {
            let (signer_key, sender_key) = pair_key(&signer_asset, &sender_asset);
            let index = INDEXES.may_load(deps.storage, (&signer_key, &sender_key))?;
            to_binary(&index).map_err(ContractError::from)
        }
        QueryMsg::IsBlacklisted { asset } => {
            to_binary(&is_blacklisted(deps.storage, &asset)).map_err(ContractError::from)
        }
        QueryMsg::GetLocators {
            signer_asset,
            sender_asset,
            start_after,
            limit,
        } => {
            let locators =
                query_locators(deps, signer_asset, sender_asset, start_after, limit)?;
            to_binary(&locators).map_err(ContractError::from)
        }
        QueryMsg::GetLocator {
            user,
            signer_asset,
            sender_asset,
        } => {
            let index = load_index(deps.storage, &signer_asset, &sender_asset)?;
            let entry = index::get_locator(deps.storage, index.id, &user)?.map(|record| {
                LocatorEntry {
                    account: user,
                    score: record.score,
                    locator: record.locator,
                }
            });
            to_binary(&entry).map_err(ContractError::from)
        }
        QueryMsg::GetStakedAmount {
            user,
            signer_asset,
            sender_asset,
        } => {
            let index = load_index(deps.storage, &signer_asset, &sender_asset)?;
            let score = index::get_score(deps.storage, index.id, &user)?;
            to_binary(&score).map_err(ContractError::from)
        }
    }
}

/// Locators of a pair by descending score. Never fails on a blacklisted pair, a missing
/// index or a paused contract: the page is simply empty.
fn query_locators(
    deps: Deps,
    signer_asset: AssetInfo,
    sender_asset: AssetInfo,
    start_after: Option<Addr>,
    limit: Option<u32>,
) -> StdResult<Vec<LocatorEntry>> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused
        || is_blacklisted(deps.storage, &signer_asset)
        || is_blacklisted(deps.storage, &sender_asset)
    {
        return Ok(vec![]);
    }

    let (signer_key, sender_key) = pair_key(&signer_asset, &sender_asset);
    let index = match INDEXES.may_load(deps.storage, (&signer_key, &sender_key))? {
        Some(index) => index,
        None => return Ok(vec![]),
    };

    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    index::get_locators(deps.storage, index.id, start_after.as_ref(), limit)
}

// ----------------x----------------x----------------x----------------x----------------x----------------
// ----------------x----------------x     Migrate function :: Entry Point      x----------------x-------
// ----------------x----------------x----------------x----------------x----------------x----------------

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

    Ok(Response::new().add_event(
        Event::new(concatcp!(CONTRACT_NAME, "::migrate"))
            .add_attribute("from_version", contract_version.version)
            .add_attribute("to_version", CONTRACT_VERSION),
    ))
}
