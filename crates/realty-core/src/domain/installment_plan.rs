//! Installment plan entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{non_blank, non_negative_amount, positive_amount};
use super::{Entity, EntityKind};
use crate::error::DomainError;
use realty_shared::RecordId;

/// Payment schedule agreed for a property purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct InstallmentPlan {
    #[validate(range(min = 1, message = "property_id is required"))]
    pub property_id: RecordId,

    #[validate(range(min = 1, message = "buyer_id is required"))]
    pub buyer_id: RecordId,

    #[validate(custom(function = "positive_amount", message = "total_price must be positive"))]
    pub total_price: f64,

    #[validate(custom(function = "non_negative_amount", message = "down_payment must not be negative"))]
    pub down_payment: f64,

    #[validate(range(min = 1, message = "num_installments must be positive"))]
    pub num_installments: i32,

    #[validate(custom(function = "non_blank"))]
    pub frequency: String,

    pub first_installment: NaiveDate,

    #[validate(custom(function = "non_negative_amount", message = "interest_rate must not be negative"))]
    pub interest_rate: f64,
}

impl Entity for InstallmentPlan {
    const KIND: EntityKind = EntityKind::InstallmentPlan;

    fn check_rules(&self) -> Result<(), DomainError> {
        if self.down_payment > self.total_price {
            return Err(DomainError::ValidationError(
                "down_payment must not exceed total_price".into(),
            ));
        }
        Ok(())
    }
}
