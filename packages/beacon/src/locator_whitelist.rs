use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: Addr,
    /// Locators whitelisted from the start
    pub locators: Vec<String>,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Adds locators to the whitelist. Owner only.
    AddLocators { locators: Vec<String> },
    /// Removes locators from the whitelist. Owner only.
    RemoveLocators { locators: Vec<String> },
    ProposeNewOwner { owner: Addr, expires_in: u64 },
    DropOwnershipProposal {},
    ClaimOwnership {},
}

/// Any contract answering [`QueryMsg::Has`] can serve as the locator whitelist of an indexer.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(bool)]
    Has { locator: String },
    #[returns(Addr)]
    Owner {},
}
