//! # Realty Core - Domain Module
//! 
//! Persisted entities and the audit/soft-delete record contract they share.

pub mod record;
pub mod transaction;
pub mod property;
pub mod buyer;
pub mod sale;
pub mod letting;
pub mod introduction;
pub mod installment_plan;
pub mod installment;
pub mod payment;
pub mod location_pricing;
pub mod user;
pub mod commission;

mod validation;

// Re-export all entities and enums
pub use record::{admit, Audit, Entity, EntityKind, Record, RecordState};
pub use transaction::{CommissionType, TransactionRef, TransactionType};
pub use property::Property;
pub use buyer::Buyer;
pub use sale::Sale;
pub use letting::Letting;
pub use introduction::Introduction;
pub use installment_plan::InstallmentPlan;
pub use installment::{Installment, InstallmentStatus};
pub use payment::Payment;
pub use location_pricing::LocationPricing;
pub use user::User;
pub use commission::{Commission, CommissionInput, CommissionTerms};
