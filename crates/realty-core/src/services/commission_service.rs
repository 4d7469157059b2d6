// ============================================================================
// Realty Core - Commission Service
// File: crates/realty-core/src/services/commission_service.rs
// Description: Gate, resolve, calculate, persist
// ============================================================================
//! Commission lifecycle.
//!
//! Create and update both run the full pipeline: authorize, parse the closed
//! enumerations, validate, resolve the linked transaction, confirm the
//! beneficiary, calculate, and store. The transaction is resolved again on
//! every write so `calculated_amount` always reflects its current value.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{Commission, CommissionInput, EntityKind, Record, TransactionType, User};
use crate::error::DomainError;
use crate::repositories::DynRepository;
use crate::services::commission_calculator::calculate;
use crate::services::context::RequestContext;
use crate::services::permission_gate::{Action, PermissionGate};
use crate::services::transaction_resolver::TransactionResolver;
use realty_shared::RecordId;

/// Optional narrowing for [`CommissionService::list_commissions`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommissionFilter {
    pub transaction_type: Option<TransactionType>,
    pub beneficiary_id: Option<RecordId>,
}

impl CommissionFilter {
    pub fn matches(&self, commission: &Commission) -> bool {
        self.transaction_type
            .map_or(true, |t| commission.transaction.transaction_type == t)
            && self
                .beneficiary_id
                .map_or(true, |id| commission.beneficiary_id == id)
    }
}

#[derive(Clone)]
pub struct CommissionService {
    commissions: DynRepository<Commission>,
    users: DynRepository<User>,
    resolver: TransactionResolver,
    gate: Arc<PermissionGate>,
}

impl CommissionService {
    pub fn new(
        commissions: DynRepository<Commission>,
        users: DynRepository<User>,
        resolver: TransactionResolver,
        gate: Arc<PermissionGate>,
    ) -> Self {
        Self {
            commissions,
            users,
            resolver,
            gate,
        }
    }

    pub async fn create_commission(
        &self,
        ctx: &RequestContext,
        input: &CommissionInput,
    ) -> Result<RecordId, DomainError> {
        self.authorize(ctx, Action::Create)?;
        let commission = self.derive(ctx, input).await?;
        let amount = commission.calculated_amount;

        let id = self
            .commissions
            .create(&ctx.tenant_id, ctx.stamp(), commission)
            .await?;
        info!(
            "Commission {} created for {} {} (amount {})",
            id, input.transaction_type, input.transaction_id, amount
        );
        Ok(id)
    }

    pub async fn update_commission(
        &self,
        ctx: &RequestContext,
        id: RecordId,
        input: &CommissionInput,
    ) -> Result<(), DomainError> {
        self.authorize(ctx, Action::Update)?;
        self.commissions.get_by_id(&ctx.tenant_id, id).await?;

        let commission = self.derive(ctx, input).await?;
        let amount = commission.calculated_amount;
        self.commissions
            .update(&ctx.tenant_id, ctx.stamp(), id, commission)
            .await?;
        info!("Commission {} recalculated (amount {})", id, amount);
        Ok(())
    }

    pub async fn get_commission(
        &self,
        ctx: &RequestContext,
        id: RecordId,
    ) -> Result<Record<Commission>, DomainError> {
        self.authorize(ctx, Action::View)?;
        self.commissions.get_by_id(&ctx.tenant_id, id).await
    }

    pub async fn list_commissions(
        &self,
        ctx: &RequestContext,
        filter: &CommissionFilter,
    ) -> Result<Vec<Record<Commission>>, DomainError> {
        self.authorize(ctx, Action::View)?;
        let mut commissions = self.commissions.list_all(&ctx.tenant_id).await?;
        commissions.retain(|record| filter.matches(&record.data));
        Ok(commissions)
    }

    pub async fn delete_commission(&self, ctx: &RequestContext, id: RecordId) -> Result<(), DomainError> {
        self.authorize(ctx, Action::Delete)?;
        self.commissions
            .soft_delete(&ctx.tenant_id, ctx.stamp(), id)
            .await?;
        info!("Commission {} deleted by {}", id, ctx.actor.username);
        Ok(())
    }

    fn authorize(&self, ctx: &RequestContext, action: Action) -> Result<(), DomainError> {
        self.gate
            .authorize_action(&ctx.actor, action, EntityKind::Commission)
    }

    /// Everything between authorization and persistence.
    async fn derive(&self, ctx: &RequestContext, input: &CommissionInput) -> Result<Commission, DomainError> {
        let terms = input.parse()?;
        let transaction = self.resolver.resolve(&ctx.tenant_id, terms.transaction).await?;

        match self.users.get_by_id(&ctx.tenant_id, terms.beneficiary_id).await {
            Ok(_) => {}
            Err(DomainError::NotFound(_)) => {
                warn!("Commission beneficiary {} not found", terms.beneficiary_id);
                return Err(DomainError::BeneficiaryNotFound(terms.beneficiary_id));
            }
            Err(err) => return Err(err),
        }

        let amount = calculate(terms.commission_type, terms.rate_or_amount, transaction.base_value());
        Ok(terms.into_commission(amount))
    }
}
