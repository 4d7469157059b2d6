//! Sale transaction entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{non_blank, positive_amount};
use super::{Entity, EntityKind};
use realty_shared::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Sale {
    #[validate(range(min = 1, message = "property_id is required"))]
    pub property_id: RecordId,

    #[validate(range(min = 1, message = "buyer_id is required"))]
    pub buyer_id: RecordId,

    #[validate(custom(function = "positive_amount", message = "sale_price must be positive"))]
    pub sale_price: f64,

    pub sale_date: NaiveDate,

    #[validate(custom(function = "non_blank"))]
    pub sale_type: String,
}

impl Entity for Sale {
    const KIND: EntityKind = EntityKind::Sale;
}
