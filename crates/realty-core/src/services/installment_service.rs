//! Installments, listable per plan

use crate::domain::{Installment, Record};
use crate::error::DomainError;
use crate::services::context::RequestContext;
use crate::services::entity_service::EntityService;
use crate::services::permission_gate::Action;
use realty_shared::RecordId;

#[derive(Clone)]
pub struct InstallmentService {
    inner: EntityService<Installment>,
}

impl InstallmentService {
    pub fn new(inner: EntityService<Installment>) -> Self {
        Self { inner }
    }

    pub async fn create(&self, ctx: &RequestContext, data: Installment) -> Result<RecordId, DomainError> {
        self.inner.create(ctx, data).await
    }

    pub async fn get(&self, ctx: &RequestContext, id: RecordId) -> Result<Record<Installment>, DomainError> {
        self.inner.get(ctx, id).await
    }

    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Record<Installment>>, DomainError> {
        self.inner.list(ctx).await
    }

    /// Live installments of one plan, ordered by sequence number.
    pub async fn list_installments_by_plan(
        &self,
        ctx: &RequestContext,
        plan_id: RecordId,
    ) -> Result<Vec<Record<Installment>>, DomainError> {
        self.inner.authorize(ctx, Action::View)?;
        let mut installments = self.inner.repository().list_all(&ctx.tenant_id).await?;
        installments.retain(|record| record.data.plan_id == plan_id);
        installments.sort_by_key(|record| record.data.sequence_number);
        Ok(installments)
    }

    pub async fn update(&self, ctx: &RequestContext, id: RecordId, data: Installment) -> Result<(), DomainError> {
        self.inner.update(ctx, id, data).await
    }

    pub async fn delete(&self, ctx: &RequestContext, id: RecordId) -> Result<(), DomainError> {
        self.inner.delete(ctx, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InstallmentStatus;
    use crate::repositories::{InMemoryRepository, TenantRepository};
    use crate::services::context::Actor;
    use crate::services::permission_gate::PermissionGate;
    use chrono::NaiveDate;
    use realty_shared::TenantId;
    use std::sync::Arc;

    struct Fixture {
        repo: Arc<InMemoryRepository<Installment>>,
        service: InstallmentService,
    }

    fn fixture() -> Fixture {
        let repo = Arc::new(InMemoryRepository::new());
        let gate = Arc::new(PermissionGate::with_default_policy());
        let service = InstallmentService::new(EntityService::new(repo.clone(), gate));
        Fixture { repo, service }
    }

    fn installment(plan_id: RecordId, sequence_number: i32) -> Installment {
        Installment {
            plan_id,
            sequence_number,
            due_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            amount_due: 400.0,
            amount_paid: 0.0,
            status: InstallmentStatus::Pending,
            late_fee: 0.0,
            paid_date: None,
        }
    }

    fn manager() -> RequestContext {
        RequestContext::new("t1", Actor::new(1, "meg", "manager"))
    }

    #[tokio::test]
    async fn test_list_by_plan_skips_other_plans() {
        let f = fixture();
        let ctx = manager();
        let second = f.service.create(&ctx, installment(7, 2)).await.unwrap();
        f.service.create(&ctx, installment(8, 1)).await.unwrap();
        let first = f.service.create(&ctx, installment(7, 1)).await.unwrap();

        let listed = f.service.list_installments_by_plan(&ctx, 7).await.unwrap();
        let ids: Vec<_> = listed.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![first, second]);
        assert!(f.service.list_installments_by_plan(&ctx, 9).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_by_plan_skips_deleted() {
        let f = fixture();
        let ctx = manager();
        let kept = f.service.create(&ctx, installment(7, 1)).await.unwrap();
        let dropped = f.service.create(&ctx, installment(7, 2)).await.unwrap();
        f.service.delete(&ctx, dropped).await.unwrap();

        let listed = f.service.list_installments_by_plan(&ctx, 7).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, kept);
    }

    #[tokio::test]
    async fn test_list_by_plan_is_tenant_scoped() {
        let f = fixture();
        f.repo
            .create(&TenantId::new("t2"), "seed", installment(7, 1))
            .await
            .unwrap();

        assert!(f.service.list_installments_by_plan(&manager(), 7).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_by_plan_requires_view() {
        let f = fixture();
        f.service.create(&manager(), installment(7, 1)).await.unwrap();
        f.repo.set_offline(true);

        let outsider = RequestContext::new("t1", Actor::new(4, "oz", "contractor"));
        let err = f.service.list_installments_by_plan(&outsider, 7).await.unwrap_err();
        assert_eq!(err, DomainError::PermissionDenied("view_installment".into()));
    }
}
