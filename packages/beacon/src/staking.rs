use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw20::Cw20ReceiveMsg;

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: Addr,
    /// cw20 token being staked
    pub token: Addr,
    /// Seconds it takes a fresh stake to fully vest. Must be greater than zero.
    pub vesting_length: u64,
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct Config {
    /// owner can change the vesting length and the display metadata
    pub owner: Addr,
    pub token: Addr,
    /// Vesting length captured by stake records on their next deposit
    pub vesting_length: u64,
    pub name: String,
    pub symbol: String,
}

/// Stake of a single account.
///
/// `timestamp` is the weighted average deposit time of the balance and `duration` the vesting
/// length captured at the last deposit. The balance vests linearly from `timestamp` over `duration`.
#[cw_serde]
#[derive(Default)]
pub struct StakeRecord {
    pub balance: Uint128,
    pub timestamp: u64,
    pub duration: u64,
}

#[cw_serde]
pub enum Cw20HookMsg {
    /// Stakes the sent tokens for the sender, or for its principal if the sender is a delegate.
    /// This is a single message flow vs. two message allowance flow.
    Stake {},
    /// Stakes the sent tokens for `account`.
    StakeFor { account: Addr },
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Allows the contract to receive the staking token through cw20 `Send`.
    Receive(Cw20ReceiveMsg),
    /// Stakes `amount` from the sender's allowance. A registered delegate stakes for its principal.
    Stake { amount: Uint128 },
    /// Stakes `amount` from the sender's allowance for `account`.
    StakeFor { account: Addr, amount: Uint128 },
    /// Withdraws `amount` of the sender's vested stake.
    Unstake { amount: Uint128 },
    /// Registers `account` as the sender's delegate.
    /// The delegate must not hold a stake when it is registered.
    AddDelegate { account: Addr },
    /// Removes the sender's delegate.
    RemoveDelegate { account: Addr },
    /// Sets the vesting length for future deposits. Owner only.
    SetVesting { vesting_length: u64 },
    /// Sets display name and symbol. Owner only.
    SetMetaData { name: String, symbol: String },
    /// Allows the owner to transfer ownership to a new address.
    /// Ownership transfer is done in two steps:
    /// 1. The owner proposes a new owner.
    /// 2. The new owner accepts the ownership.
    /// The proposal expires after a certain period of time within which the new owner must accept the ownership.
    ProposeNewOwner { owner: Addr, expires_in: u64 },
    /// Allows the owner to drop the ownership transfer proposal.
    DropOwnershipProposal {},
    /// Allows the new owner to accept ownership.
    ClaimOwnership {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    /// Returns the current owner of the contract
    #[returns(Addr)]
    Owner {},
    /// Returns the staked balance of an account
    #[returns(Uint128)]
    BalanceOf { account: Addr },
    /// Returns the sum of all staked balances
    #[returns(Uint128)]
    TotalSupply {},
    /// Returns the decimals of the staking token
    #[returns(u8)]
    Decimals {},
    /// Returns the vested amount an account can unstake at the current block time
    #[returns(Uint128)]
    Available { account: Addr },
    /// Returns the raw stake record of an account
    #[returns(StakeRecord)]
    Stakes { account: Addr },
    /// Returns the delegate registered by `principal`
    #[returns(Option<Addr>)]
    Delegate { principal: Addr },
    /// Returns the principal `delegate` stakes for
    #[returns(Option<Addr>)]
    Principal { delegate: Addr },
}
