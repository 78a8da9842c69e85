#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use const_format::concatcp;
use cosmwasm_std::{
    from_binary, to_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response,
    StdError, Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use cw20::{Cw20QueryMsg, Cw20ReceiveMsg, TokenInfoResponse};

use beacon::{
    helper::{
        build_transfer_cw20_from_user_msg, claim_ownership, drop_ownership_proposal,
        propose_new_owner, EventExt,
    },
    staking::{Config, Cw20HookMsg, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
};

use crate::{
    error::ContractError,
    execute::{
        delegate::{add_delegate, remove_delegate},
        ensure_owner,
        stake::{resolve_beneficiary, stake, unstake},
    },
    state::{CONFIG, DELEGATE_OF, OWNERSHIP_PROPOSAL, PRINCIPAL_OF, STAKES, TOTAL_SUPPLY},
    vesting,
};

/// Contract name that is used for migration.
pub const CONTRACT_NAME: &str = "beacon-staking";
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

    if msg.vesting_length == 0 {
        return Err(ContractError::ZeroVestingLength);
    }

    let config = Config {
        owner: deps.api.addr_validate(msg.owner.as_str())?,
        token: deps.api.addr_validate(msg.token.as_str())?,
        vesting_length: msg.vesting_length,
        name: msg.name,
        symbol: msg.symbol,
    };
    CONFIG.save(deps.storage, &config)?;
    TOTAL_SUPPLY.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new().add_event(
        Event::from_info(concatcp!(CONTRACT_NAME, "::instantiate"), &info)
            .add_attribute("owner", config.owner.to_string())
            .add_attribute("token", config.token.to_string())
            .add_attribute("vesting_length", config.vesting_length.to_string())
            .add_attribute("name", config.name)
            .add_attribute("symbol", config.symbol),
    ))
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
        ExecuteMsg::Receive(msg) => receive_cw20(deps, env, info, msg),
        ExecuteMsg::Stake { amount } => {
            let beneficiary = resolve_beneficiary(deps.storage, &info.sender)?;
            stake_from_allowance(deps, env, info, beneficiary, amount)
        }
        ExecuteMsg::StakeFor { account, amount } => {
            let beneficiary = deps.api.addr_validate(account.as_str())?;
            stake_from_allowance(deps, env, info, beneficiary, amount)
        }
        ExecuteMsg::Unstake { amount } => unstake(deps, env, info, amount),
        ExecuteMsg::AddDelegate { account } => add_delegate(deps, info, account),
        ExecuteMsg::RemoveDelegate { account } => remove_delegate(deps, info, account),
        ExecuteMsg::SetVesting { vesting_length } => set_vesting(deps, info, vesting_length),
        ExecuteMsg::SetMetaData { name, symbol } => set_meta_data(deps, info, name, symbol),
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

/// Stakes tokens sent to the contract through cw20 `Send`.
/// The cw20 sender takes the place of the message sender.
fn receive_cw20(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.token {
        return Err(ContractError::InvalidToken {
            expected: config.token.to_string(),
            received: info.sender.to_string(),
        });
    }

    let sender = deps.api.addr_validate(&cw20_msg.sender)?;
    match from_binary(&cw20_msg.msg)? {
        Cw20HookMsg::Stake {} => {
            let beneficiary = resolve_beneficiary(deps.storage, &sender)?;
            stake(deps, env, sender, beneficiary, cw20_msg.amount)
        }
        Cw20HookMsg::StakeFor { account } => {
            let beneficiary = deps.api.addr_validate(account.as_str())?;
            stake(deps, env, sender, beneficiary, cw20_msg.amount)
        }
    }
}

/// Credits `beneficiary` and pulls `amount` from the sender's allowance.
fn stake_from_allowance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    beneficiary: Addr,
    amount: Uint128,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    let transfer_msg = build_transfer_cw20_from_user_msg(
        config.token.to_string(),
        info.sender.to_string(),
        env.contract.address.to_string(),
        amount,
    )?;

    let response = stake(deps, env, info.sender, beneficiary, amount)?;
    Ok(response.add_message(transfer_msg))
}

fn set_vesting(deps: DepsMut, info: MessageInfo, vesting_length: u64) -> ContractResult<Response> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    if vesting_length == 0 {
        return Err(ContractError::ZeroVestingLength);
    }

    config.vesting_length = vesting_length;
    CONFIG.save(deps.storage, &config)?;

    let event = Event::from_info(concatcp!(CONTRACT_NAME, "::set_vesting"), &info)
        .add_attribute("vesting_length", vesting_length.to_string());

    Ok(Response::new().add_event(event))
}

fn set_meta_data(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
    symbol: String,
) -> ContractResult<Response> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.name = name;
    config.symbol = symbol;
    CONFIG.save(deps.storage, &config)?;

    let event = Event::from_info(concatcp!(CONTRACT_NAME, "::set_meta_data"), &info)
        .add_attribute("name", config.name)
        .add_attribute("symbol", config.symbol);

    Ok(Response::new().add_event(event))
}

// ----------------x----------------x----------------x----------------x----------------x----------------
// ----------------x----------------x     Query function :: Entry Point      x----------------x---------
// ----------------x----------------x----------------x----------------x----------------x----------------

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&CONFIG.load(deps.storage)?).map_err(ContractError::from),
        QueryMsg::Owner {} => {
            let config = CONFIG.load(deps.storage)?;
            to_binary(&config.owner).map_err(ContractError::from)
        }
        QueryMsg::BalanceOf { account } => {
            let balance = STAKES
                .may_load(deps.storage, &account)?
                .map(|record| record.balance)
                .unwrap_or_default();
            to_binary(&balance).map_err(ContractError::from)
        }
        QueryMsg::TotalSupply {} => {
            let total_supply = TOTAL_SUPPLY.may_load(deps.storage)?.unwrap_or_default();
            to_binary(&total_supply).map_err(ContractError::from)
        }
        QueryMsg::Decimals {} => {
            let config = CONFIG.load(deps.storage)?;
            let token_info: TokenInfoResponse = deps
                .querier
                .query_wasm_smart(config.token, &Cw20QueryMsg::TokenInfo {})?;
            to_binary(&token_info.decimals).map_err(ContractError::from)
        }
        QueryMsg::Available { account } => {
            let record = STAKES.may_load(deps.storage, &account)?.unwrap_or_default();
            let available = vesting::available(&record, env.block.time.seconds());
            to_binary(&available).map_err(ContractError::from)
        }
        QueryMsg::Stakes { account } => {
            let record = STAKES.may_load(deps.storage, &account)?.unwrap_or_default();
            to_binary(&record).map_err(ContractError::from)
        }
        QueryMsg::Delegate { principal } => {
            let delegate = PRINCIPAL_OF.may_load(deps.storage, &principal)?;
            to_binary(&delegate).map_err(ContractError::from)
        }
        QueryMsg::Principal { delegate } => {
            let principal = DELEGATE_OF.may_load(deps.storage, &delegate)?;
            to_binary(&principal).map_err(ContractError::from)
        }
    }
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
