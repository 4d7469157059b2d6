//! Repository traits (ports) and the in-process storage medium

pub mod tenant_repository;
pub mod in_memory;

pub use tenant_repository::{DynRepository, TenantRepository};
pub use in_memory::InMemoryRepository;
