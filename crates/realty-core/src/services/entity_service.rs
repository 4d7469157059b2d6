// ============================================================================
// Realty Core - Entity Service
// File: crates/realty-core/src/services/entity_service.rs
// Description: Permission-gated CRUD for any entity kind
// ============================================================================

use std::sync::Arc;

use tracing::info;

use crate::domain::{Entity, Record};
use crate::error::DomainError;
use crate::repositories::DynRepository;
use crate::services::context::RequestContext;
use crate::services::permission_gate::{Action, PermissionGate};
use realty_shared::RecordId;

/// Gate first, repository second. A denied call never reaches storage.
pub struct EntityService<T: Entity> {
    repo: DynRepository<T>,
    gate: Arc<PermissionGate>,
}

impl<T: Entity> Clone for EntityService<T> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            gate: self.gate.clone(),
        }
    }
}

impl<T: Entity> EntityService<T> {
    pub fn new(repo: DynRepository<T>, gate: Arc<PermissionGate>) -> Self {
        Self { repo, gate }
    }

    pub(crate) fn authorize(&self, ctx: &RequestContext, action: Action) -> Result<(), DomainError> {
        self.gate.authorize_action(&ctx.actor, action, T::KIND)
    }

    pub(crate) fn repository(&self) -> &DynRepository<T> {
        &self.repo
    }

    pub async fn create(&self, ctx: &RequestContext, data: T) -> Result<RecordId, DomainError> {
        self.authorize(ctx, Action::Create)?;
        let id = self.repo.create(&ctx.tenant_id, ctx.stamp(), data).await?;
        info!("{} {} created by {}", T::KIND, id, ctx.actor.username);
        Ok(id)
    }

    pub async fn get(&self, ctx: &RequestContext, id: RecordId) -> Result<Record<T>, DomainError> {
        self.authorize(ctx, Action::View)?;
        self.repo.get_by_id(&ctx.tenant_id, id).await
    }

    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Record<T>>, DomainError> {
        self.authorize(ctx, Action::View)?;
        self.repo.list_all(&ctx.tenant_id).await
    }

    pub async fn update(&self, ctx: &RequestContext, id: RecordId, data: T) -> Result<(), DomainError> {
        self.authorize(ctx, Action::Update)?;
        self.repo.update(&ctx.tenant_id, ctx.stamp(), id, data).await
    }

    pub async fn delete(&self, ctx: &RequestContext, id: RecordId) -> Result<(), DomainError> {
        self.authorize(ctx, Action::Delete)?;
        self.repo.soft_delete(&ctx.tenant_id, ctx.stamp(), id).await?;
        info!("{} {} deleted by {}", T::KIND, id, ctx.actor.username);
        Ok(())
    }
}
