// ============================================================================
// Realty Core - Commission Entity
// File: crates/realty-core/src/domain/commission.rs
// Description: Commission records, caller input, and parsed terms
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{CommissionType, Entity, EntityKind, TransactionRef, TransactionType};
use crate::error::DomainError;
use realty_shared::RecordId;

/// Persisted commission. `calculated_amount` is always derived server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Commission {
    #[serde(flatten)]
    pub transaction: TransactionRef,

    #[validate(range(min = 1, message = "beneficiary_id is required"))]
    pub beneficiary_id: RecordId,

    pub commission_type: CommissionType,

    pub rate_or_amount: f64,

    pub calculated_amount: f64,

    pub memo: Option<String>,
}

impl Entity for Commission {
    const KIND: EntityKind = EntityKind::Commission;

    fn check_rules(&self) -> Result<(), DomainError> {
        self.transaction.validate()?;
        check_rate(self.commission_type, self.rate_or_amount)
    }
}

/// Commission fields as supplied by a caller, enums still in wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionInput {
    pub transaction_type: String,
    pub transaction_id: RecordId,
    pub beneficiary_id: RecordId,
    pub commission_type: String,
    /// Fraction in `[0, 1]` for percentage commissions, currency amount for fixed.
    pub rate_or_amount: f64,
    #[serde(default)]
    pub memo: Option<String>,
}

impl CommissionInput {
    /// Validate the closed enumerations and the numeric fields.
    ///
    /// The transaction type is checked first so an unknown kind never reaches a lookup.
    pub fn parse(&self) -> Result<CommissionTerms, DomainError> {
        let transaction_type = TransactionType::parse(&self.transaction_type)?;
        let commission_type = CommissionType::parse(&self.commission_type)?;

        let terms = CommissionTerms {
            transaction: TransactionRef::new(transaction_type, self.transaction_id),
            beneficiary_id: self.beneficiary_id,
            commission_type,
            rate_or_amount: self.rate_or_amount,
            memo: self.memo.clone(),
        };
        terms.check()?;
        Ok(terms)
    }
}

/// Parsed and validated commission input, ready for resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct CommissionTerms {
    pub transaction: TransactionRef,
    pub beneficiary_id: RecordId,
    pub commission_type: CommissionType,
    pub rate_or_amount: f64,
    pub memo: Option<String>,
}

impl CommissionTerms {
    pub fn check(&self) -> Result<(), DomainError> {
        self.transaction.validate()?;
        if self.beneficiary_id < 1 {
            return Err(DomainError::ValidationError("beneficiary_id is required".into()));
        }
        check_rate(self.commission_type, self.rate_or_amount)
    }

    pub fn into_commission(self, calculated_amount: f64) -> Commission {
        Commission {
            transaction: self.transaction,
            beneficiary_id: self.beneficiary_id,
            commission_type: self.commission_type,
            rate_or_amount: self.rate_or_amount,
            calculated_amount,
            memo: self.memo,
        }
    }
}

fn check_rate(commission_type: CommissionType, rate_or_amount: f64) -> Result<(), DomainError> {
    if !rate_or_amount.is_finite() {
        return Err(DomainError::ValidationError("rate_or_amount must be a number".into()));
    }
    match commission_type {
        CommissionType::Percentage if !(0.0..=1.0).contains(&rate_or_amount) => Err(
            DomainError::ValidationError("percentage rate must be a fraction between 0 and 1".into()),
        ),
        CommissionType::Fixed if rate_or_amount <= 0.0 => Err(DomainError::ValidationError(
            "fixed amount must be positive".into(),
        )),
        _ => Ok(()),
    }
}
