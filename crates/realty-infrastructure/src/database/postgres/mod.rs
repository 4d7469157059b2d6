//! PostgreSQL repository implementations

pub mod pg_entity;
pub mod entities;
pub mod repository;

use std::sync::Arc;

use sqlx::PgPool;

use realty_core::domain::{
    Buyer, Commission, Installment, InstallmentPlan, Introduction, Letting, LocationPricing, Payment,
    Property, Sale, User,
};
use realty_core::services::Repositories;

pub use pg_entity::{PgEntity, RecordMetaRow};
pub use repository::PgRepository;

/// Every entity repository backed by one pool.
pub fn pg_repositories(pool: PgPool) -> Repositories {
    Repositories {
        properties: Arc::new(PgRepository::<Property>::new(pool.clone())),
        buyers: Arc::new(PgRepository::<Buyer>::new(pool.clone())),
        sales: Arc::new(PgRepository::<Sale>::new(pool.clone())),
        lettings: Arc::new(PgRepository::<Letting>::new(pool.clone())),
        introductions: Arc::new(PgRepository::<Introduction>::new(pool.clone())),
        plans: Arc::new(PgRepository::<InstallmentPlan>::new(pool.clone())),
        installments: Arc::new(PgRepository::<Installment>::new(pool.clone())),
        payments: Arc::new(PgRepository::<Payment>::new(pool.clone())),
        pricing: Arc::new(PgRepository::<LocationPricing>::new(pool.clone())),
        users: Arc::new(PgRepository::<User>::new(pool.clone())),
        commissions: Arc::new(PgRepository::<Commission>::new(pool)),
    }
}
