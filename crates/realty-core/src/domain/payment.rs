//! Payment made against an installment

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{non_blank, positive_amount};
use super::{Entity, EntityKind};
use realty_shared::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Payment {
    #[validate(range(min = 1, message = "installment_id is required"))]
    pub installment_id: RecordId,

    #[validate(custom(function = "positive_amount", message = "amount_paid must be positive"))]
    pub amount_paid: f64,

    pub payment_date: NaiveDate,

    #[validate(custom(function = "non_blank"))]
    pub payment_method: String,

    pub transaction_ref: Option<String>,
}

impl Entity for Payment {
    const KIND: EntityKind = EntityKind::Payment;
}
