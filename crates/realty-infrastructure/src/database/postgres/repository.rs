// ============================================================================
// Realty Infrastructure - PostgreSQL Tenant Repository
// File: crates/realty-infrastructure/src/database/postgres/repository.rs
// ============================================================================

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{error, info};

use realty_core::domain::{admit, Audit, Record};
use realty_core::error::DomainError;
use realty_core::repositories::TenantRepository;
use realty_shared::{RecordId, TenantId};

use super::pg_entity::{PgEntity, META_COLUMNS};

/// One table, one entity kind. Every statement filters on `tenant_id` and,
/// outside of inserts, on `deleted = FALSE`.
pub struct PgRepository<T> {
    pool: PgPool,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for PgRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: PgEntity> PgRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

fn storage_error<T: PgEntity>(operation: &str) -> impl FnOnce(sqlx::Error) -> DomainError + '_ {
    move |e| {
        error!("Database error on {} {}: {}", operation, T::TABLE, e);
        DomainError::StorageError(e.to_string())
    }
}

fn select_columns<T: PgEntity>() -> String {
    META_COLUMNS
        .iter()
        .chain(T::COLUMNS)
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn select_statement<T: PgEntity>(
    tenant_id: &TenantId,
    id: Option<RecordId>,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {} FROM {}", select_columns::<T>(), T::TABLE));
    qb.push(" WHERE tenant_id = ")
        .push_bind(tenant_id.as_str().to_string());
    match id {
        Some(id) => {
            qb.push(" AND id = ").push_bind(id).push(" AND deleted = FALSE");
        }
        None => {
            qb.push(" AND deleted = FALSE ORDER BY id");
        }
    }
    qb
}

pub(crate) fn insert_statement<T: PgEntity>(
    tenant_id: &TenantId,
    audit: &Audit,
    entity: &T,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!(
        "INSERT INTO {} (tenant_id, created_by, created_at, modified_by, last_modified, deleted, {}) VALUES (",
        T::TABLE,
        T::COLUMNS.join(", ")
    ));
    {
        let mut values = qb.separated(", ");
        values
            .push_bind(tenant_id.as_str().to_string())
            .push_bind(audit.created_by.clone())
            .push_bind(audit.created_at)
            .push_bind(audit.modified_by.clone())
            .push_bind(audit.last_modified)
            .push_bind(false);
        entity.push_values(&mut values);
    }
    qb.push(") RETURNING id");
    qb
}

pub(crate) fn update_statement<T: PgEntity>(record: &Record<T>) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("UPDATE {} SET modified_by = ", T::TABLE));
    qb.push_bind(record.audit.modified_by.clone())
        .push(", last_modified = ")
        .push_bind(record.audit.last_modified)
        .push(format!(", ({}) = ROW(", T::COLUMNS.join(", ")));
    {
        let mut values = qb.separated(", ");
        record.data.push_values(&mut values);
    }
    qb.push(")");
    push_active_row_filter(&mut qb, record);
    qb
}

pub(crate) fn soft_delete_statement<T: PgEntity>(record: &Record<T>) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("UPDATE {} SET deleted = TRUE, modified_by = ", T::TABLE));
    qb.push_bind(record.audit.modified_by.clone())
        .push(", last_modified = ")
        .push_bind(record.audit.last_modified);
    push_active_row_filter(&mut qb, record);
    qb
}

fn push_active_row_filter<T>(qb: &mut QueryBuilder<'static, Postgres>, record: &Record<T>) {
    qb.push(" WHERE tenant_id = ")
        .push_bind(record.tenant_id.as_str().to_string())
        .push(" AND id = ")
        .push_bind(record.id)
        .push(" AND deleted = FALSE");
}

#[async_trait]
impl<T: PgEntity> TenantRepository for PgRepository<T> {
    type Entity = T;

    async fn create(&self, tenant_id: &TenantId, actor: &str, entity: T) -> Result<RecordId, DomainError> {
        let audit = admit(tenant_id, actor, &entity, Utc::now())?;

        let id: i64 = insert_statement(tenant_id, &audit, &entity)
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error::<T>("insert into"))?;

        info!("Created {} {} for tenant {}", T::KIND, id, tenant_id);
        Ok(id)
    }

    async fn get_by_id(&self, tenant_id: &TenantId, id: RecordId) -> Result<Record<T>, DomainError> {
        let row: Option<T::Row> = select_statement::<T>(tenant_id, Some(id))
            .build_query_as::<T::Row>()
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error::<T>("select from"))?;

        match row {
            Some(row) => T::from_row(row),
            None => Err(DomainError::NotFound(T::KIND)),
        }
    }

    async fn list_all(&self, tenant_id: &TenantId) -> Result<Vec<Record<T>>, DomainError> {
        let rows: Vec<T::Row> = select_statement::<T>(tenant_id, None)
            .build_query_as::<T::Row>()
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error::<T>("list"))?;

        rows.into_iter().map(T::from_row).collect()
    }

    async fn update(&self, tenant_id: &TenantId, actor: &str, id: RecordId, entity: T) -> Result<(), DomainError> {
        let mut record = self.get_by_id(tenant_id, id).await?;
        record.revise(actor, Utc::now(), entity)?;

        let result = update_statement(&record)
            .build()
            .execute(&self.pool)
            .await
            .map_err(storage_error::<T>("update"))?;

        // Deleted between the read and the write.
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(T::KIND));
        }
        Ok(())
    }

    async fn soft_delete(&self, tenant_id: &TenantId, actor: &str, id: RecordId) -> Result<(), DomainError> {
        let mut record = self.get_by_id(tenant_id, id).await?;
        record.mark_deleted(actor, Utc::now())?;

        let result = soft_delete_statement(&record)
            .build()
            .execute(&self.pool)
            .await
            .map_err(storage_error::<T>("soft delete"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(T::KIND));
        }
        info!("Soft-deleted {} {} for tenant {}", T::KIND, id, tenant_id);
        Ok(())
    }
}
