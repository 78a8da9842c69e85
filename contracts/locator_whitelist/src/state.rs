use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use beacon::helper::OwnershipProposal;

pub const OWNER: Item<Addr> = Item::new("owner");

/// Ownership proposal in case of ownership transfer is initiated
pub const OWNERSHIP_PROPOSAL: Item<OwnershipProposal> = Item::new("ownership_proposal");

pub const LOCATORS: Map<&str, bool> = Map::new("locators");
