use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

/// ## Description
/// This enum describes indexer contract errors!
#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Contract is paused")]
    ContractPaused,

    #[error("Index does not exist for pair {signer_asset} / {sender_asset}")]
    IndexDoesNotExist {
        signer_asset: String,
        sender_asset: String,
    },

    #[error("No locator set by {account} for this pair")]
    EntryDoesNotExist { account: String },

    #[error("Pair {signer_asset} / {sender_asset} is blacklisted")]
    PairIsBlacklisted {
        signer_asset: String,
        sender_asset: String,
    },

    #[error("Locator {locator} is not whitelisted")]
    LocatorNotWhitelisted { locator: String },

    #[error("Locator cannot be empty")]
    EmptyLocator,
}

impl From<OverflowError> for ContractError {
    fn from(o: OverflowError) -> Self {
        StdError::from(o).into()
    }
}
