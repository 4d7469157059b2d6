//! # Realty Core
//! 
//! Domain entities, the tenant-scoped repository port, and the commission
//! and permission services for the realty back office.

pub mod domain;
pub mod repositories;
pub mod services;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::{DomainError, ErrorKind};
