//! Tenant-scoped repository trait (port)

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Entity, Record};
use crate::error::DomainError;
use realty_shared::{RecordId, TenantId};

/// Persistence for one entity kind under the audit/soft-delete contract.
///
/// Every call names its tenant explicitly. Rows that are soft-deleted or owned
/// by another tenant are reported as `NotFound`, exactly like missing rows.
#[async_trait]
pub trait TenantRepository: Send + Sync {
    type Entity: Entity;

    /// Validate, stamp `created_*`, and store. Returns the storage-assigned id.
    async fn create(
        &self,
        tenant_id: &TenantId,
        actor: &str,
        entity: Self::Entity,
    ) -> Result<RecordId, DomainError>;

    async fn get_by_id(
        &self,
        tenant_id: &TenantId,
        id: RecordId,
    ) -> Result<Record<Self::Entity>, DomainError>;

    /// Active rows of the tenant, in id order.
    async fn list_all(&self, tenant_id: &TenantId) -> Result<Vec<Record<Self::Entity>>, DomainError>;

    /// Replace every mutable field of an active row and stamp `modified_*`.
    async fn update(
        &self,
        tenant_id: &TenantId,
        actor: &str,
        id: RecordId,
        entity: Self::Entity,
    ) -> Result<(), DomainError>;

    async fn soft_delete(
        &self,
        tenant_id: &TenantId,
        actor: &str,
        id: RecordId,
    ) -> Result<(), DomainError>;
}

pub type DynRepository<T> = Arc<dyn TenantRepository<Entity = T>>;
