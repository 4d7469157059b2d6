//! Introductions, with their linked sale or letting checked on every write

use tracing::info;

use crate::domain::{Entity, Introduction, Record};
use crate::error::DomainError;
use crate::services::context::RequestContext;
use crate::services::entity_service::EntityService;
use crate::services::permission_gate::Action;
use crate::services::transaction_resolver::TransactionResolver;
use realty_shared::RecordId;

#[derive(Clone)]
pub struct IntroductionService {
    inner: EntityService<Introduction>,
    resolver: TransactionResolver,
}

impl IntroductionService {
    pub fn new(inner: EntityService<Introduction>, resolver: TransactionResolver) -> Self {
        Self { inner, resolver }
    }

    pub async fn create(&self, ctx: &RequestContext, data: Introduction) -> Result<RecordId, DomainError> {
        self.inner.authorize(ctx, Action::Create)?;
        self.check_link(ctx, &data).await?;
        let id = self
            .inner
            .repository()
            .create(&ctx.tenant_id, ctx.stamp(), data)
            .await?;
        info!("introduction {} created by {}", id, ctx.actor.username);
        Ok(id)
    }

    pub async fn update(&self, ctx: &RequestContext, id: RecordId, data: Introduction) -> Result<(), DomainError> {
        self.inner.authorize(ctx, Action::Update)?;
        self.check_link(ctx, &data).await?;
        self.inner
            .repository()
            .update(&ctx.tenant_id, ctx.stamp(), id, data)
            .await
    }

    pub async fn get(&self, ctx: &RequestContext, id: RecordId) -> Result<Record<Introduction>, DomainError> {
        self.inner.get(ctx, id).await
    }

    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Record<Introduction>>, DomainError> {
        self.inner.list(ctx).await
    }

    pub async fn delete(&self, ctx: &RequestContext, id: RecordId) -> Result<(), DomainError> {
        self.inner.delete(ctx, id).await
    }

    async fn check_link(&self, ctx: &RequestContext, data: &Introduction) -> Result<(), DomainError> {
        // Field rules first, so an introduction-to-introduction link never reaches storage.
        data.check()?;
        if let Some(link) = data.linked_transaction {
            self.resolver.resolve(&ctx.tenant_id, link).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Letting, Sale, TransactionRef, TransactionType};
    use crate::repositories::{InMemoryRepository, TenantRepository};
    use crate::services::context::Actor;
    use crate::services::permission_gate::PermissionGate;
    use chrono::NaiveDate;
    use std::sync::Arc;

    struct Fixture {
        sales: Arc<InMemoryRepository<Sale>>,
        introductions: Arc<InMemoryRepository<Introduction>>,
        service: IntroductionService,
    }

    fn fixture() -> Fixture {
        let sales = Arc::new(InMemoryRepository::new());
        let lettings: Arc<InMemoryRepository<Letting>> = Arc::new(InMemoryRepository::new());
        let introductions = Arc::new(InMemoryRepository::new());
        let gate = Arc::new(PermissionGate::with_default_policy());
        let service = IntroductionService::new(
            EntityService::new(introductions.clone(), gate),
            TransactionResolver::new(sales.clone(), lettings, introductions.clone()),
        );
        Fixture {
            sales,
            introductions,
            service,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 20).unwrap()
    }

    fn intro(link: Option<TransactionRef>) -> Introduction {
        Introduction {
            introducer_id: 5,
            introduced_party: "Kim".to_string(),
            property_id: 1,
            linked_transaction: link,
            intro_date: date(),
            agreed_fee: 300.0,
            fee_type: "flat".to_string(),
        }
    }

    fn ctx() -> RequestContext {
        RequestContext::new("t1", Actor::new(1, "sam", "sales"))
    }

    #[tokio::test]
    async fn test_linked_sale_must_exist() {
        let f = fixture();
        let link = TransactionRef::new(TransactionType::Sale, 12);

        let err = f.service.create(&ctx(), intro(Some(link))).await.unwrap_err();
        assert_eq!(err.to_string(), "sale not found");
        assert!(f.introductions.snapshot().is_empty());

        let sale = Sale {
            property_id: 1,
            buyer_id: 1,
            sale_price: 90_000.0,
            sale_date: date(),
            sale_type: "leasehold".to_string(),
        };
        let sale_id = f.sales.create(&ctx().tenant_id, "seed", sale).await.unwrap();
        let link = TransactionRef::new(TransactionType::Sale, sale_id);
        let id = f.service.create(&ctx(), intro(Some(link))).await.unwrap();

        let record = f.service.get(&ctx(), id).await.unwrap();
        assert_eq!(record.data.linked_transaction, Some(link));
    }

    #[tokio::test]
    async fn test_cannot_link_to_introduction() {
        let f = fixture();
        let first = f.service.create(&ctx(), intro(None)).await.unwrap();

        let link = TransactionRef::new(TransactionType::Introduction, first);
        let err = f.service.update(&ctx(), first, intro(Some(link))).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransactionType(_)));
    }

    #[tokio::test]
    async fn test_delete_requires_permission() {
        let f = fixture();
        let id = f.service.create(&ctx(), intro(None)).await.unwrap();

        let err = f.service.delete(&ctx(), id).await.unwrap_err();
        assert_eq!(err, DomainError::PermissionDenied("delete_introduction".into()));

        let manager = RequestContext::new("t1", Actor::new(2, "meg", "manager"));
        f.service.delete(&manager, id).await.unwrap();
        assert!(f.service.list(&manager).await.unwrap().is_empty());
    }
}
