use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid amount. Amount cannot be zero")]
    ZeroAmount,

    #[error("Vesting length must be greater than zero")]
    ZeroVestingLength,

    #[error("Amount exceeds available. Available: {available}, requested: {requested}")]
    AmountExceedsAvailable {
        available: Uint128,
        requested: Uint128,
    },

    #[error("Invalid token. Expected {expected}, got {received}")]
    InvalidToken { expected: String, received: String },

    #[error("Sender already has a delegate")]
    SenderHasDelegate,

    #[error("Sender is a delegate and can't have a delegate of its own")]
    SenderIsDelegate,

    #[error("Sender has a stake and can't acquire a delegate")]
    PrincipalMustNotBeStaked,

    #[error("{account} is already a delegate")]
    DelegateTaken { account: String },

    #[error("{account} has a delegate of its own and can't be a delegate")]
    DelegateIsPrincipal { account: String },

    #[error("Cannot be a delegate of oneself")]
    InvalidDelegate,

    #[error("{account} has a stake and can't be a delegate")]
    DelegateMustNotBeStaked { account: String },

    #[error("{account} is not the sender's delegate")]
    DelegateNotFound { account: String },
}

impl From<OverflowError> for ContractError {
    fn from(o: OverflowError) -> Self {
        StdError::from(o).into()
    }
}
