//! # Realty Infrastructure
//! 
//! PostgreSQL storage for the realty back office (adapters).

pub mod database;

pub use database::{create_pool, run_migrations, DatabaseError, PgRepository};
