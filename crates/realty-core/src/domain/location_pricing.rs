//! Price guidance per square foot by postal code

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{non_blank, positive_amount};
use super::{Entity, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LocationPricing {
    #[validate(custom(function = "non_blank"))]
    pub zip_code: String,

    pub city: String,

    #[validate(custom(function = "positive_amount", message = "price_per_sqft must be positive"))]
    pub price_per_sqft: f64,

    pub effective_date: NaiveDate,
}

impl Entity for LocationPricing {
    const KIND: EntityKind = EntityKind::LocationPricing;
}
