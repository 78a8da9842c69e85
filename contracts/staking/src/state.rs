use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use beacon::{
    helper::OwnershipProposal,
    staking::{Config, StakeRecord},
};

// Global config of the contract
pub const CONFIG: Item<Config> = Item::new("config");

/// Ownership proposal in case of ownership transfer is initiated
pub const OWNERSHIP_PROPOSAL: Item<OwnershipProposal> = Item::new("ownership_proposal");

/// Stake of every account that ever staked. Records are kept after a full unstake.
pub const STAKES: Map<&Addr, StakeRecord> = Map::new("stakes");

/// Sum of all staked balances
pub const TOTAL_SUPPLY: Item<Uint128> = Item::new("total_supply");

/// delegate => principal
pub const DELEGATE_OF: Map<&Addr, Addr> = Map::new("delegate_of");

/// principal => delegate
pub const PRINCIPAL_OF: Map<&Addr, Addr> = Map::new("principal_of");
