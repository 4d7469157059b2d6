//! Domain services (business logic)

pub mod context;
pub mod permission_gate;
pub mod transaction_resolver;
pub mod commission_calculator;
pub mod entity_service;
pub mod introduction_service;
pub mod installment_service;
pub mod commission_service;
pub mod actor_resolver;
pub mod registry;

pub use context::{Actor, RequestContext};
pub use permission_gate::{operation_name, Action, Decision, PermissionGate};
pub use transaction_resolver::{ResolvedTransaction, TransactionResolver};
pub use commission_calculator::calculate;
pub use entity_service::EntityService;
pub use introduction_service::IntroductionService;
pub use installment_service::InstallmentService;
pub use commission_service::{CommissionFilter, CommissionService};
pub use actor_resolver::ActorResolver;
pub use registry::{RealtyServices, Repositories};
