// ============================================================================
// Realty Core - In-Memory Repository
// File: crates/realty-core/src/repositories/in_memory.rs
// Description: Process-local storage medium honouring the tenant contract
// ============================================================================

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::domain::{admit, Entity, Record};
use crate::error::DomainError;
use crate::repositories::TenantRepository;
use realty_shared::{RecordId, TenantId};

struct Table<T> {
    next_id: RecordId,
    rows: BTreeMap<RecordId, Record<T>>,
}

/// Ids are allocated from one sequence shared by all tenants, like a
/// `BIGSERIAL` column.
pub struct InMemoryRepository<T> {
    table: RwLock<Table<T>>,
    offline: AtomicBool,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
            offline: AtomicBool::new(false),
        }
    }

    /// While offline every call fails with `StorageError`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Rows in any state, for inspecting soft-deleted data.
    pub fn snapshot(&self) -> Vec<Record<T>> {
        self.table.read().rows.values().cloned().collect()
    }

    fn ensure_online(&self) -> Result<(), DomainError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(DomainError::StorageError(format!(
                "{} store is unavailable",
                T::KIND
            )));
        }
        Ok(())
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> TenantRepository for InMemoryRepository<T> {
    type Entity = T;

    async fn create(&self, tenant_id: &TenantId, actor: &str, entity: T) -> Result<RecordId, DomainError> {
        self.ensure_online()?;
        let audit = admit(tenant_id, actor, &entity, Utc::now())?;

        let mut table = self.table.write();
        let id = table.next_id;
        table.next_id += 1;
        table
            .rows
            .insert(id, Record::new(id, tenant_id.clone(), audit, entity));

        info!("Created {} {} for tenant {}", T::KIND, id, tenant_id);
        Ok(id)
    }

    async fn get_by_id(&self, tenant_id: &TenantId, id: RecordId) -> Result<Record<T>, DomainError> {
        self.ensure_online()?;
        self.table
            .read()
            .rows
            .get(&id)
            .filter(|record| record.is_visible_to(tenant_id))
            .cloned()
            .ok_or(DomainError::NotFound(T::KIND))
    }

    async fn list_all(&self, tenant_id: &TenantId) -> Result<Vec<Record<T>>, DomainError> {
        self.ensure_online()?;
        Ok(self
            .table
            .read()
            .rows
            .values()
            .filter(|record| record.is_visible_to(tenant_id))
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        tenant_id: &TenantId,
        actor: &str,
        id: RecordId,
        entity: T,
    ) -> Result<(), DomainError> {
        self.ensure_online()?;
        let mut table = self.table.write();
        let record = table
            .rows
            .get_mut(&id)
            .filter(|record| record.is_visible_to(tenant_id))
            .ok_or(DomainError::NotFound(T::KIND))?;

        record.revise(actor, Utc::now(), entity)?;
        debug!("Updated {} {} for tenant {}", T::KIND, id, tenant_id);
        Ok(())
    }

    async fn soft_delete(&self, tenant_id: &TenantId, actor: &str, id: RecordId) -> Result<(), DomainError> {
        self.ensure_online()?;
        let mut table = self.table.write();
        let record = table
            .rows
            .get_mut(&id)
            .filter(|record| record.is_visible_to(tenant_id))
            .ok_or(DomainError::NotFound(T::KIND))?;

        record.mark_deleted(actor, Utc::now())?;
        info!("Soft-deleted {} {} for tenant {}", T::KIND, id, tenant_id);
        Ok(())
    }
}
