// ============================================================================
// Realty Infrastructure - Table Mapping
// File: crates/realty-infrastructure/src/database/postgres/pg_entity.rs
// Description: How an entity maps onto its table and row type
// ============================================================================

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};

use realty_core::domain::{Audit, Entity, Record, RecordState};
use realty_core::error::DomainError;
use realty_shared::TenantId;

/// Columns shared by every entity table, in select order.
pub const META_COLUMNS: &[&str] = &[
    "id",
    "tenant_id",
    "created_by",
    "created_at",
    "modified_by",
    "last_modified",
    "deleted",
];

/// An entity stored in its own PostgreSQL table.
pub trait PgEntity: Entity {
    const TABLE: &'static str;

    /// Entity-specific columns. [`PgEntity::push_values`] binds them in this order.
    const COLUMNS: &'static [&'static str];

    type Row: for<'r> FromRow<'r, PgRow> + Send + Unpin;

    fn from_row(row: Self::Row) -> Result<Record<Self>, DomainError>;

    fn push_values(&self, values: &mut Separated<'_, '_, Postgres, &'static str>);
}

#[derive(Debug, FromRow)]
pub struct RecordMetaRow {
    pub id: i64,
    pub tenant_id: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub modified_by: String,
    pub last_modified: DateTime<Utc>,
    pub deleted: bool,
}

impl RecordMetaRow {
    pub fn into_record<T>(self, data: T) -> Record<T> {
        Record {
            id: self.id,
            tenant_id: TenantId::new(self.tenant_id),
            audit: Audit {
                created_by: self.created_by,
                created_at: self.created_at,
                modified_by: self.modified_by,
                last_modified: self.last_modified,
            },
            state: RecordState::from_deleted_flag(self.deleted),
            data,
        }
    }
}

/// Error for a stored enum value outside its closed set.
pub(crate) fn corrupt_column(table: &str, column: &str, value: &str) -> DomainError {
    DomainError::StorageError(format!("{}.{} holds unexpected value '{}'", table, column, value))
}
