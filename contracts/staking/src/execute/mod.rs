use cosmwasm_std::Addr;
use beacon::staking::Config;

use crate::{contract::ContractResult, error::ContractError};

pub mod delegate;
pub mod stake;

pub fn ensure_owner(config: &Config, sender: &Addr) -> ContractResult<()> {
    if *sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}
