//! Domain errors

use thiserror::Error;

use crate::domain::{EntityKind, TransactionType};
use realty_shared::RecordId;

/// Category of a [`DomainError`], for callers that branch on outcome rather
/// than on the exact message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    InvalidTransactionType,
    InvalidCommissionType,
    Storage,
    PermissionDenied,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Missing, soft-deleted, and foreign-tenant rows all land here.
    #[error("{0} record not found")]
    NotFound(EntityKind),

    #[error("{transaction_type} not found")]
    TransactionNotFound {
        transaction_type: TransactionType,
        transaction_id: RecordId,
    },

    #[error("beneficiary user not found")]
    BeneficiaryNotFound(RecordId),

    #[error("Invalid transaction type: {0}")]
    InvalidTransactionType(String),

    #[error("Invalid commission type: {0}")]
    InvalidCommissionType(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::ValidationError(_) => ErrorKind::Validation,
            DomainError::NotFound(_)
            | DomainError::TransactionNotFound { .. }
            | DomainError::BeneficiaryNotFound(_) => ErrorKind::NotFound,
            DomainError::InvalidTransactionType(_) => ErrorKind::InvalidTransactionType,
            DomainError::InvalidCommissionType(_) => ErrorKind::InvalidCommissionType,
            DomainError::StorageError(_) => ErrorKind::Storage,
            DomainError::PermissionDenied(_) => ErrorKind::PermissionDenied,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
