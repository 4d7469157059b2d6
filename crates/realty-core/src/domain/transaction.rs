// ============================================================================
// Realty Core - Transaction References
// File: crates/realty-core/src/domain/transaction.rs
// Description: Closed enumerations that cross the service boundary
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;
use realty_shared::RecordId;

/// Kind of deal a commission or introduction points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Sale,
    Letting,
    Introduction,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Sale => "sale",
            TransactionType::Letting => "letting",
            TransactionType::Introduction => "introduction",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "sale" => Some(TransactionType::Sale),
            "letting" => Some(TransactionType::Letting),
            "introduction" => Some(TransactionType::Introduction),
            _ => None,
        }
    }

    /// Parse a wire value, rejecting anything outside the closed set.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        Self::from_str(s).ok_or_else(|| DomainError::InvalidTransactionType(s.to_string()))
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a commission's payable amount is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommissionType {
    /// Rate is a fraction of the transaction's base value (5% is `0.05`).
    Percentage,
    /// Rate is the payable amount itself.
    Fixed,
}

impl CommissionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommissionType::Percentage => "percentage",
            CommissionType::Fixed => "fixed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "percentage" => Some(CommissionType::Percentage),
            "fixed" => Some(CommissionType::Fixed),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self, DomainError> {
        Self::from_str(s).ok_or_else(|| DomainError::InvalidCommissionType(s.to_string()))
    }
}

impl fmt::Display for CommissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pointer into the sale, letting, or introduction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TransactionRef {
    pub transaction_type: TransactionType,

    #[validate(range(min = 1, message = "transaction_id is required"))]
    pub transaction_id: RecordId,
}

impl TransactionRef {
    pub fn new(transaction_type: TransactionType, transaction_id: RecordId) -> Self {
        Self {
            transaction_type,
            transaction_id,
        }
    }
}
