pub mod contract;
pub mod error;
pub mod execute;
pub mod state;
pub mod vesting;
