// ============================================================================
// Realty Core - Record Contract
// File: crates/realty-core/src/domain/record.rs
// Description: Tenant ownership, audit stamps, and logical deletion
// ============================================================================

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;
use realty_shared::{RecordId, TenantId};

/// Kind of persisted entity. Doubles as the noun in permission names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Property,
    Buyer,
    Sale,
    Letting,
    Introduction,
    InstallmentPlan,
    Installment,
    Payment,
    LocationPricing,
    User,
    Commission,
}

impl EntityKind {
    pub const ALL: [EntityKind; 11] = [
        EntityKind::Property,
        EntityKind::Buyer,
        EntityKind::Sale,
        EntityKind::Letting,
        EntityKind::Introduction,
        EntityKind::InstallmentPlan,
        EntityKind::Installment,
        EntityKind::Payment,
        EntityKind::LocationPricing,
        EntityKind::User,
        EntityKind::Commission,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Property => "property",
            EntityKind::Buyer => "buyer",
            EntityKind::Sale => "sale",
            EntityKind::Letting => "letting",
            EntityKind::Introduction => "introduction",
            EntityKind::InstallmentPlan => "plan",
            EntityKind::Installment => "installment",
            EntityKind::Payment => "payment",
            EntityKind::LocationPricing => "pricing",
            EntityKind::User => "user",
            EntityKind::Commission => "commission",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity-specific payload stored inside a [`Record`].
pub trait Entity: Validate + Clone + fmt::Debug + Send + Sync + 'static {
    const KIND: EntityKind;

    /// Cross-field rules the validator annotations cannot express.
    fn check_rules(&self) -> Result<(), DomainError> {
        Ok(())
    }

    fn check(&self) -> Result<(), DomainError> {
        self.validate()?;
        self.check_rules()
    }
}

/// Who created and last touched a row, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audit {
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub modified_by: String,
    pub last_modified: DateTime<Utc>,
}

impl Audit {
    pub fn created(actor: &str, at: DateTime<Utc>) -> Self {
        Self {
            created_by: actor.to_string(),
            created_at: at,
            modified_by: actor.to_string(),
            last_modified: at,
        }
    }

    /// Stamp a mutation. Creation fields are left alone.
    pub fn touch(&mut self, actor: &str, at: DateTime<Utc>) {
        self.modified_by = actor.to_string();
        self.last_modified = at;
    }
}

/// Lifecycle of a row. `Deleted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordState {
    #[default]
    Active,
    Deleted,
}

impl RecordState {
    pub fn from_deleted_flag(deleted: bool) -> Self {
        if deleted {
            RecordState::Deleted
        } else {
            RecordState::Active
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, RecordState::Deleted)
    }
}

/// A persisted entity together with its identity, owner, and audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record<T> {
    pub id: RecordId,
    pub tenant_id: TenantId,
    #[serde(flatten)]
    pub audit: Audit,
    pub state: RecordState,
    #[serde(flatten)]
    pub data: T,
}

/// Checks a create request and returns the audit stamp for the new row.
///
/// Storage assigns the id afterwards; nothing is written when this fails.
pub fn admit<T: Entity>(
    tenant_id: &TenantId,
    actor: &str,
    data: &T,
    at: DateTime<Utc>,
) -> Result<Audit, DomainError> {
    if tenant_id.is_blank() {
        return Err(DomainError::ValidationError("tenant_id is required".into()));
    }
    require_actor(actor)?;
    data.check()?;
    Ok(Audit::created(actor, at))
}

fn require_actor(actor: &str) -> Result<(), DomainError> {
    if actor.trim().is_empty() {
        return Err(DomainError::ValidationError("acting user is required".into()));
    }
    Ok(())
}

impl<T: Entity> Record<T> {
    pub fn new(id: RecordId, tenant_id: TenantId, audit: Audit, data: T) -> Self {
        Self {
            id,
            tenant_id,
            audit,
            state: RecordState::Active,
            data,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.state.is_deleted()
    }

    /// Whether a read scoped to `tenant_id` may observe this row.
    pub fn is_visible_to(&self, tenant_id: &TenantId) -> bool {
        self.is_active() && &self.tenant_id == tenant_id
    }

    /// Overwrite every mutable field and stamp the modification.
    pub fn revise(&mut self, actor: &str, at: DateTime<Utc>, data: T) -> Result<(), DomainError> {
        self.ensure_active()?;
        require_actor(actor)?;
        data.check()?;
        self.data = data;
        self.audit.touch(actor, at);
        Ok(())
    }

    pub fn mark_deleted(&mut self, actor: &str, at: DateTime<Utc>) -> Result<(), DomainError> {
        self.ensure_active()?;
        require_actor(actor)?;
        self.state = RecordState::Deleted;
        self.audit.touch(actor, at);
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), DomainError> {
        if self.state.is_deleted() {
            return Err(DomainError::NotFound(T::KIND));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Property;
    use chrono::{Duration, NaiveDate};

    fn property(address: &str) -> Property {
        Property {
            address: address.to_string(),
            city: "Austin".to_string(),
            zip: "78701".to_string(),
            listing_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
    }

    #[test]
    fn test_admit_requires_tenant_and_actor() {
        let now = Utc::now();
        let data = property("1 Main St");

        assert!(matches!(
            admit(&TenantId::new(""), "alice", &data, now),
            Err(DomainError::ValidationError(_))
        ));
        assert!(matches!(
            admit(&TenantId::new("t1"), " ", &data, now),
            Err(DomainError::ValidationError(_))
        ));

        let audit = admit(&TenantId::new("t1"), "alice", &data, now).unwrap();
        assert_eq!(audit.created_by, "alice");
        assert_eq!(audit.created_at, audit.last_modified);
    }

    #[test]
    fn test_admit_rejects_invalid_payload() {
        let result = admit(&TenantId::new("t1"), "alice", &property("   "), Utc::now());
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn test_revise_preserves_creation_stamp() {
        let created = Utc::now();
        let mut record = Record::new(
            1,
            TenantId::new("t1"),
            Audit::created("alice", created),
            property("1 Main St"),
        );

        let later = created + Duration::minutes(5);
        record.revise("bob", later, property("2 Main St")).unwrap();

        assert_eq!(record.data.address, "2 Main St");
        assert_eq!(record.audit.created_by, "alice");
        assert_eq!(record.audit.created_at, created);
        assert_eq!(record.audit.modified_by, "bob");
        assert_eq!(record.audit.last_modified, later);
    }

    #[test]
    fn test_deleted_is_terminal() {
        let mut record = Record::new(
            1,
            TenantId::new("t1"),
            Audit::created("alice", Utc::now()),
            property("1 Main St"),
        );

        record.mark_deleted("bob", Utc::now()).unwrap();
        assert!(!record.is_active());
        assert!(!record.is_visible_to(&TenantId::new("t1")));
        assert_eq!(record.audit.modified_by, "bob");

        assert_eq!(
            record.mark_deleted("bob", Utc::now()),
            Err(DomainError::NotFound(EntityKind::Property))
        );
        assert_eq!(
            record.revise("bob", Utc::now(), property("3 Main St")),
            Err(DomainError::NotFound(EntityKind::Property))
        );
    }

    #[test]
    fn test_permission_nouns_are_unique() {
        let mut nouns: Vec<&str> = EntityKind::ALL.iter().map(|k| k.as_str()).collect();
        nouns.sort();
        nouns.dedup();
        assert_eq!(nouns.len(), EntityKind::ALL.len());
    }
}
