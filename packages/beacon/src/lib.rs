pub mod asset;
pub mod helper;
pub mod indexer;
pub mod locator_whitelist;
pub mod staking;

/// Default number of entries returned by paginated queries
pub const DEFAULT_LIMIT: u32 = 10;
/// Upper bound on the number of entries returned by paginated queries
pub const MAX_LIMIT: u32 = 100;
