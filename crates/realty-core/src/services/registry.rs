// ============================================================================
// Realty Core - Service Registry
// File: crates/realty-core/src/services/registry.rs
// Description: One repository per entity kind, and the services built on them
// ============================================================================

use std::sync::Arc;

use crate::domain::{
    Buyer, Commission, Installment, InstallmentPlan, Introduction, Letting, LocationPricing, Payment,
    Property, Sale, User,
};
use crate::repositories::{DynRepository, InMemoryRepository};
use crate::services::actor_resolver::ActorResolver;
use crate::services::commission_service::CommissionService;
use crate::services::entity_service::EntityService;
use crate::services::installment_service::InstallmentService;
use crate::services::introduction_service::IntroductionService;
use crate::services::permission_gate::PermissionGate;
use crate::services::transaction_resolver::TransactionResolver;
use realty_shared::config::AppConfig;

/// Storage handles for every entity kind.
#[derive(Clone)]
pub struct Repositories {
    pub properties: DynRepository<Property>,
    pub buyers: DynRepository<Buyer>,
    pub sales: DynRepository<Sale>,
    pub lettings: DynRepository<Letting>,
    pub introductions: DynRepository<Introduction>,
    pub plans: DynRepository<InstallmentPlan>,
    pub installments: DynRepository<Installment>,
    pub payments: DynRepository<Payment>,
    pub pricing: DynRepository<LocationPricing>,
    pub users: DynRepository<User>,
    pub commissions: DynRepository<Commission>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            properties: Arc::new(InMemoryRepository::<Property>::new()),
            buyers: Arc::new(InMemoryRepository::<Buyer>::new()),
            sales: Arc::new(InMemoryRepository::<Sale>::new()),
            lettings: Arc::new(InMemoryRepository::<Letting>::new()),
            introductions: Arc::new(InMemoryRepository::<Introduction>::new()),
            plans: Arc::new(InMemoryRepository::<InstallmentPlan>::new()),
            installments: Arc::new(InMemoryRepository::<Installment>::new()),
            payments: Arc::new(InMemoryRepository::<Payment>::new()),
            pricing: Arc::new(InMemoryRepository::<LocationPricing>::new()),
            users: Arc::new(InMemoryRepository::<User>::new()),
            commissions: Arc::new(InMemoryRepository::<Commission>::new()),
        }
    }

    pub fn transaction_resolver(&self) -> TransactionResolver {
        TransactionResolver::new(
            self.sales.clone(),
            self.lettings.clone(),
            self.introductions.clone(),
        )
    }
}

/// Every service sharing one permission gate.
#[derive(Clone)]
pub struct RealtyServices {
    pub properties: EntityService<Property>,
    pub buyers: EntityService<Buyer>,
    pub sales: EntityService<Sale>,
    pub lettings: EntityService<Letting>,
    pub introductions: IntroductionService,
    pub plans: EntityService<InstallmentPlan>,
    pub installments: InstallmentService,
    pub payments: EntityService<Payment>,
    pub pricing: EntityService<LocationPricing>,
    pub users: EntityService<User>,
    pub commissions: CommissionService,
    pub actors: ActorResolver,
}

impl RealtyServices {
    pub fn new(repos: &Repositories, gate: PermissionGate) -> Self {
        let gate = Arc::new(gate);
        let resolver = repos.transaction_resolver();

        Self {
            properties: EntityService::new(repos.properties.clone(), gate.clone()),
            buyers: EntityService::new(repos.buyers.clone(), gate.clone()),
            sales: EntityService::new(repos.sales.clone(), gate.clone()),
            lettings: EntityService::new(repos.lettings.clone(), gate.clone()),
            introductions: IntroductionService::new(
                EntityService::new(repos.introductions.clone(), gate.clone()),
                resolver.clone(),
            ),
            plans: EntityService::new(repos.plans.clone(), gate.clone()),
            installments: InstallmentService::new(EntityService::new(
                repos.installments.clone(),
                gate.clone(),
            )),
            payments: EntityService::new(repos.payments.clone(), gate.clone()),
            pricing: EntityService::new(repos.pricing.clone(), gate.clone()),
            users: EntityService::new(repos.users.clone(), gate.clone()),
            commissions: CommissionService::new(
                repos.commissions.clone(),
                repos.users.clone(),
                resolver,
                gate,
            ),
            actors: ActorResolver::new(repos.users.clone()),
        }
    }

    /// Services gated by the `permissions` section of the loaded config.
    pub fn from_config(repos: &Repositories, config: &AppConfig) -> Self {
        Self::new(repos, PermissionGate::from_config(&config.permissions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CommissionInput, InstallmentStatus};
    use crate::repositories::TenantRepository;
    use crate::error::{DomainError, ErrorKind};
    use crate::services::commission_service::CommissionFilter;
    use crate::TransactionType;
    use crate::services::{Actor, RequestContext};
    use chrono::NaiveDate;
    use realty_shared::config::{AppSettings, DatabaseSettings};
    use realty_shared::TenantId;
    use std::collections::HashMap;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, day).unwrap()
    }

    #[tokio::test]
    async fn test_end_to_end_commission_flow() {
        let repos = Repositories::in_memory();
        let services = RealtyServices::new(&repos, PermissionGate::with_default_policy());
        let tenant = TenantId::new("acme");

        let admin_id = repos
            .users
            .create(
                &tenant,
                "bootstrap",
                User {
                    username: "root".to_string(),
                    password_hash: String::new(),
                    first_name: "Ro".to_string(),
                    last_name: "Ot".to_string(),
                    role: "admin".to_string(),
                    email: "root@acme.test".to_string(),
                    phone: None,
                },
            )
            .await
            .unwrap();
        let admin = services.actors.resolve(&tenant, admin_id).await.unwrap();

        let property_id = services
            .properties
            .create(
                &admin,
                Property {
                    address: "10 Pine Rd".to_string(),
                    city: "Boise".to_string(),
                    zip: "83702".to_string(),
                    listing_date: date(1),
                },
            )
            .await
            .unwrap();
        let buyer_id = services
            .buyers
            .create(
                &admin,
                Buyer {
                    first_name: "Lee".to_string(),
                    last_name: "Park".to_string(),
                    email: "lee@park.test".to_string(),
                    phone: None,
                },
            )
            .await
            .unwrap();
        let sale_id = services
            .sales
            .create(
                &admin,
                Sale {
                    property_id,
                    buyer_id,
                    sale_price: 200_000.0,
                    sale_date: date(10),
                    sale_type: "freehold".to_string(),
                },
            )
            .await
            .unwrap();

        let commission_id = services
            .commissions
            .create_commission(
                &admin,
                &CommissionInput {
                    transaction_type: "sale".to_string(),
                    transaction_id: sale_id,
                    beneficiary_id: admin_id,
                    commission_type: "percentage".to_string(),
                    rate_or_amount: 0.03,
                    memo: None,
                },
            )
            .await
            .unwrap();

        let filter = CommissionFilter {
            transaction_type: Some(TransactionType::Sale),
            beneficiary_id: Some(admin_id),
        };
        let listed = services.commissions.list_commissions(&admin, &filter).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, commission_id);
        assert_eq!(listed[0].data.calculated_amount, 6_000.0);
    }

    #[tokio::test]
    async fn test_tenants_are_isolated_across_services() {
        let repos = Repositories::in_memory();
        let services = RealtyServices::new(&repos, PermissionGate::with_default_policy());
        let first = RequestContext::new(
            "acme",
            Actor::new(1, "amy", "manager"),
        );
        let second = RequestContext::new(
            "globex",
            Actor::new(2, "gus", "manager"),
        );

        let installment = Installment {
            plan_id: 1,
            sequence_number: 1,
            due_date: date(30),
            amount_due: 500.0,
            amount_paid: 0.0,
            status: InstallmentStatus::Pending,
            late_fee: 0.0,
            paid_date: None,
        };
        let id = services.installments.create(&first, installment).await.unwrap();

        let err = services.installments.get(&second, id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(services.installments.list(&second).await.unwrap().is_empty());
        assert_eq!(services.installments.list(&first).await.unwrap().len(), 1);
    }

    fn config_with(permissions: HashMap<String, Vec<String>>) -> AppConfig {
        AppConfig {
            app: AppSettings {
                env: "test".to_string(),
                name: "realty".to_string(),
            },
            database: DatabaseSettings {
                url: "postgres://localhost/realty_test".to_string(),
                max_connections: 2,
                min_connections: 1,
                acquire_timeout_secs: 5,
            },
            permissions,
        }
    }

    #[tokio::test]
    async fn test_configured_roles_gate_commissions() {
        let repos = Repositories::in_memory();
        let permissions = HashMap::from([(
            "auditor".to_string(),
            vec!["view_commission".to_string()],
        )]);
        let services = RealtyServices::from_config(&repos, &config_with(permissions));
        let auditor = RequestContext::new("acme", Actor::new(9, "ada", "auditor"));

        let input = CommissionInput {
            transaction_type: "sale".to_string(),
            transaction_id: 1,
            beneficiary_id: 9,
            commission_type: "fixed".to_string(),
            rate_or_amount: 500.0,
            memo: None,
        };
        let err = services
            .commissions
            .create_commission(&auditor, &input)
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::PermissionDenied("create_commission".into()));

        let listed = services
            .commissions
            .list_commissions(&auditor, &CommissionFilter::default())
            .await
            .unwrap();
        assert!(listed.is_empty());

        // The built-in roles are replaced, not merged.
        let manager = RequestContext::new("acme", Actor::new(1, "amy", "manager"));
        let err = services
            .commissions
            .list_commissions(&manager, &CommissionFilter::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    }

    #[tokio::test]
    async fn test_empty_permissions_use_built_in_roles() {
        let repos = Repositories::in_memory();
        let services = RealtyServices::from_config(&repos, &config_with(HashMap::new()));
        let manager = RequestContext::new("acme", Actor::new(1, "amy", "manager"));

        let listed = services
            .commissions
            .list_commissions(&manager, &CommissionFilter::default())
            .await
            .unwrap();
        assert!(listed.is_empty());
    }
}
