//! Application-wide constants

pub const DEFAULT_APP_NAME: &str = "realty";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_MIN_CONNECTIONS: u32 = 1;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 3;
pub const DEFAULT_LOG_FILTER: &str = "info";
