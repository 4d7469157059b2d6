//! Introduction (referral) entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{non_blank, positive_amount};
use super::{Entity, EntityKind, TransactionRef, TransactionType};
use crate::error::DomainError;
use realty_shared::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Introduction {
    #[validate(range(min = 1, message = "introducer_id is required"))]
    pub introducer_id: RecordId,

    #[validate(custom(function = "non_blank"))]
    pub introduced_party: String,

    #[validate(range(min = 1, message = "property_id is required"))]
    pub property_id: RecordId,

    /// Sale or letting this introduction led to, once known.
    pub linked_transaction: Option<TransactionRef>,

    pub intro_date: NaiveDate,

    #[validate(custom(function = "positive_amount", message = "agreed_fee must be positive"))]
    pub agreed_fee: f64,

    #[validate(custom(function = "non_blank"))]
    pub fee_type: String,
}

impl Entity for Introduction {
    const KIND: EntityKind = EntityKind::Introduction;

    fn check_rules(&self) -> Result<(), DomainError> {
        if let Some(link) = &self.linked_transaction {
            link.validate()?;
            if link.transaction_type == TransactionType::Introduction {
                return Err(DomainError::InvalidTransactionType(
                    "an introduction cannot link to another introduction".into(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intro(link: Option<TransactionRef>) -> Introduction {
        Introduction {
            introducer_id: 3,
            introduced_party: "Jane Doe".to_string(),
            property_id: 1,
            linked_transaction: link,
            intro_date: NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
            agreed_fee: 500.0,
            fee_type: "flat".to_string(),
        }
    }

    #[test]
    fn test_link_must_be_sale_or_letting() {
        assert!(intro(None).check().is_ok());
        assert!(intro(Some(TransactionRef::new(TransactionType::Letting, 9)))
            .check()
            .is_ok());

        let err = intro(Some(TransactionRef::new(TransactionType::Introduction, 9)))
            .check()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransactionType(_)));
    }

    #[test]
    fn test_link_requires_id() {
        let err = intro(Some(TransactionRef::new(TransactionType::Sale, 0)))
            .check()
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }
}
