use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_binary, Addr, CosmosMsg, DepsMut, Env, Event, MessageInfo, Response, StdError, StdResult,
    Uint128, Uint256, WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use cw_storage_plus::Item;

// ----------------x----------------x----------------x----------------x----------------x----------------
// ----------------x----------------x             Event helper functions               x----------------
// ----------------x----------------x----------------x----------------x----------------x----------------

/// Adds the transaction sender to every event emitted by the contracts so that indexers
/// can attribute an event to the human caller even when it arrives through a cw20 hook.
pub trait EventExt {
    fn from_info(name: impl Into<String>, info: &MessageInfo) -> Event;
    fn from_sender(name: impl Into<String>, sender: impl Into<String>) -> Event;
}

impl EventExt for Event {
    fn from_info(name: impl Into<String>, info: &MessageInfo) -> Event {
        Event::new(name).add_attribute("tx_sender", info.sender.to_string())
    }

    fn from_sender(name: impl Into<String>, sender: impl Into<String>) -> Event {
        Event::new(name).add_attribute("tx_sender", sender)
    }
}

// ----------------x----------------x----------------x----------------x----------------x----------------
// ----------------x----------------x       Ownership Update helper functions          x----------------
// ----------------x----------------x----------------x----------------x----------------x----------------

/// ## Description
/// Describes the basic settings for creating a request for a change of ownership.
#[cw_serde]
pub struct OwnershipProposal {
    /// a new ownership.
    pub owner: Addr,
    /// time to live a request
    pub ttl: u64,
}

/// ## Description - Creates a new request to change ownership. Only owner can execute it.
/// `new_owner` is a new owner.
/// `expires_in` is the validity period of the offer to change the owner.
/// `owner` is the current owner.
/// `proposal` is the object of type [`OwnershipProposal`].
pub fn propose_new_owner(
    deps: DepsMut,
    info: MessageInfo,
    env: Env,
    new_owner: String,
    expires_in: u64,
    owner: Addr,
    proposal: Item<OwnershipProposal>,
    contract_name: &str,
) -> StdResult<Response> {
    if info.sender != owner {
        return Err(StdError::generic_err("Unauthorized"));
    }

    let new_owner = deps.api.addr_validate(new_owner.as_str())?;

    // check that owner is not the same
    if new_owner == owner {
        return Err(StdError::generic_err("New owner cannot be same"));
    }

    let ttl = env
        .block
        .time
        .seconds()
        .checked_add(expires_in)
        .ok_or_else(|| StdError::generic_err("Ownership proposal expiry overflows"))?;

    proposal.save(
        deps.storage,
        &OwnershipProposal {
            owner: new_owner.clone(),
            ttl,
        },
    )?;

    let event = Event::from_info(format!("{}::propose_new_owner", contract_name), &info)
        .add_attribute("new_owner", new_owner)
        .add_attribute("expires_in", expires_in.to_string());

    Ok(Response::new().add_event(event))
}

/// ## Description - Removes a request to change ownership. Only owner can execute it
/// `owner` is the current owner.
/// `proposal` is the object of type [`OwnershipProposal`].
pub fn drop_ownership_proposal(
    deps: DepsMut,
    info: MessageInfo,
    owner: Addr,
    proposal: Item<OwnershipProposal>,
    contract_name: &str,
) -> StdResult<Response> {
    if info.sender != owner {
        return Err(StdError::generic_err("Unauthorized"));
    }

    proposal.remove(deps.storage);

    let event = Event::from_info(format!("{}::drop_ownership_proposal", contract_name), &info);
    Ok(Response::new().add_event(event))
}

/// ## Description
/// New owner claims ownership. Only new proposed owner can execute it
/// `proposal` is the object of type [`OwnershipProposal`].
/// `callback` is a type of callback function that takes two parameters of type [`DepsMut`] and [`Addr`].
pub fn claim_ownership(
    deps: DepsMut,
    info: MessageInfo,
    env: Env,
    ownership_proposal: Item<OwnershipProposal>,
    callback: fn(DepsMut, Addr) -> StdResult<()>,
    contract_name: &str,
) -> StdResult<Response> {
    let proposal: OwnershipProposal = ownership_proposal
        .load(deps.storage)
        .map_err(|_| StdError::generic_err("Ownership proposal not found"))?;

    if info.sender != proposal.owner {
        return Err(StdError::generic_err("Unauthorized"));
    }

    if env.block.time.seconds() > proposal.ttl {
        return Err(StdError::generic_err("Ownership proposal expired"));
    }

    ownership_proposal.remove(deps.storage);
    callback(deps, proposal.owner.clone())?;

    let event = Event::from_info(format!("{}::claim_ownership", contract_name), &info)
        .add_attribute("new_owner", proposal.owner);

    Ok(Response::new().add_event(event))
}

// ----------------x----------------x----------------x----------------x----------------x----------------
// ----------------x----------------x        Transfer tokens helper functions          x----------------
// ----------------x----------------x----------------x----------------x----------------x----------------

/// @dev Helper function which returns a cosmos wasm msg to transfer cw20 tokens to a recipient address
/// @param recipient : Address to be transferred cw20 tokens to
/// @param token_contract_address : Contract address of the cw20 token to transfer
/// @param amount : Number of tokens to transfer
pub fn build_transfer_cw20_token_msg(
    recipient: Addr,
    token_contract_address: String,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token_contract_address,
        msg: to_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.into(),
            amount,
        })?,
        funds: vec![],
    }))
}

/// Helper Function. Returns CosmosMsg which pulls CW20 Tokens from an owner who has given the
/// recipient an allowance.
pub fn build_transfer_cw20_from_user_msg(
    cw20_token_address: String,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: cw20_token_address,
        funds: vec![],
        msg: to_binary(&Cw20ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        })?,
    }))
}

// ----------------x----------------x----------------x----------------x----------------x----------------
// ----------------x----------------x        Generic Math :: Helper functions          x----------------
// ----------------x----------------x----------------x----------------x----------------x----------------

/// ## Description
/// Integer division rounding towards positive infinity: `ceil(numerator / denominator)`.
/// Fails on a zero denominator.
pub fn checked_ceil_div(numerator: Uint256, denominator: Uint256) -> StdResult<Uint256> {
    let quotient = numerator.checked_div(denominator)?;
    let remainder = numerator.checked_rem(denominator)?;
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        Ok(quotient.checked_add(Uint256::one())?)
    }
}
