//! # Realty Shared
//! 
//! Shared identifiers, configuration, and telemetry for the realty workspace.

pub mod constants;
pub mod types;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
