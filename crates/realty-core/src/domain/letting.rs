//! Letting (rental) transaction entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{non_blank, positive_amount};
use super::{Entity, EntityKind};
use crate::error::DomainError;
use realty_shared::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Letting {
    #[validate(range(min = 1, message = "property_id is required"))]
    pub property_id: RecordId,

    /// The renting party, a user of the agency.
    #[validate(range(min = 1, message = "tenant_user_id is required"))]
    pub tenant_user_id: RecordId,

    #[validate(custom(function = "positive_amount", message = "rent_amount must be positive"))]
    pub rent_amount: f64,

    #[validate(range(min = 1, message = "rent_term must be positive"))]
    pub rent_term: i64,

    #[validate(custom(function = "non_blank"))]
    pub rent_cycle: String,

    pub memo: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl Entity for Letting {
    const KIND: EntityKind = EntityKind::Letting;

    fn check_rules(&self) -> Result<(), DomainError> {
        match self.end_date {
            Some(end) if end < self.start_date => Err(DomainError::ValidationError(
                "end_date must not precede start_date".into(),
            )),
            _ => Ok(()),
        }
    }
}
