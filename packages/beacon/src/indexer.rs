use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::asset::AssetInfo;

// ----------------x----------------x----------------x----------------x----------------x----------------
// ----------------x----------------x    Instantiate, Execute Msgs and Queries      x----------------x--
// ----------------x----------------x----------------x----------------x----------------x----------------

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: Addr,
    /// cw20 token that stakers lock to rank their locators
    pub staking_token: Addr,
    /// Optional oracle every locator must be a member of
    pub locator_whitelist: Option<Addr>,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct Config {
    /// owner has privilege to pause the contract, manage the blacklist and the whitelist
    /// and to drain stakes on behalf of users
    pub owner: Addr,
    /// Token stakes are denominated in. Set once at instantiation.
    pub staking_token: Addr,
    /// When set, `SetIntent` only accepts locators the oracle answers `true` for
    pub locator_whitelist: Option<Addr>,
    /// While paused, only the owner emergency unstake path remains open to move stakes
    pub paused: bool,
}

/// Index for an ordered (signer asset, sender asset) pair.
#[cw_serde]
pub struct IndexInfo {
    /// Internal identifier used to namespace the index entries in storage
    pub id: u64,
    pub signer_asset: AssetInfo,
    pub sender_asset: AssetInfo,
    /// Number of locators currently set in the index
    pub length: u64,
    /// Block time at which the index was created
    pub created_at: u64,
}

/// A locator published by `account`, ranked by `score`.
#[cw_serde]
pub struct LocatorEntry {
    pub account: Addr,
    pub score: Uint128,
    pub locator: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Sets or clears the locator whitelist oracle. Owner only.
    SetLocatorWhitelist { new_whitelist: Option<Addr> },
    /// Creates the index for a pair if it doesn't exist yet. Returns the [`IndexInfo`] as data.
    CreateIndex {
        signer_asset: AssetInfo,
        sender_asset: AssetInfo,
    },
    /// Prevents new intents for pairs involving `asset`. Owner only.
    AddToBlacklist { asset: AssetInfo },
    /// Lifts a blacklist entry. Owner only.
    RemoveFromBlacklist { asset: AssetInfo },
    /// Publishes a locator for a pair with `amount` of the staking token as its score.
    /// The sender must have given the contract an allowance covering any increase over
    /// its current stake for the pair; a decrease is refunded.
    SetIntent {
        signer_asset: AssetInfo,
        sender_asset: AssetInfo,
        amount: Uint128,
        locator: String,
    },
    /// Removes the sender's locator from a pair and returns its stake.
    /// Allowed even if one of the assets is blacklisted.
    UnsetIntent {
        signer_asset: AssetInfo,
        sender_asset: AssetInfo,
    },
    /// Owner only emergency path to remove a user's locator and return its stake.
    /// Allowed while the contract is paused.
    UnsetIntentForUser {
        user: Addr,
        signer_asset: AssetInfo,
        sender_asset: AssetInfo,
    },
    /// Pauses or resumes the contract. Owner only.
    SetPausedStatus { new_status: bool },
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
    /// Returns the index of a pair, if it was created
    #[returns(Option<IndexInfo>)]
    Index {
        signer_asset: AssetInfo,
        sender_asset: AssetInfo,
    },
    #[returns(bool)]
    IsBlacklisted { asset: AssetInfo },
    /// Returns up to `limit` locators of a pair by descending score, starting after the entry
    /// of `start_after`. Empty when the pair is blacklisted, the index doesn't exist or the
    /// contract is paused.
    #[returns(Vec<LocatorEntry>)]
    GetLocators {
        signer_asset: AssetInfo,
        sender_asset: AssetInfo,
        start_after: Option<Addr>,
        limit: Option<u32>,
    },
    /// Returns the locator `user` set for a pair
    #[returns(Option<LocatorEntry>)]
    GetLocator {
        user: Addr,
        signer_asset: AssetInfo,
        sender_asset: AssetInfo,
    },
    /// Returns the amount `user` staked for a pair. Fails if the index doesn't exist.
    #[returns(Uint128)]
    GetStakedAmount {
        user: Addr,
        signer_asset: AssetInfo,
        sender_asset: AssetInfo,
    },
}
