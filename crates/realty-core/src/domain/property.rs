//! Property listing entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::non_blank;
use super::{Entity, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Property {
    #[validate(custom(function = "non_blank"))]
    pub address: String,

    #[validate(custom(function = "non_blank"))]
    pub city: String,

    #[validate(custom(function = "non_blank"))]
    pub zip: String,

    pub listing_date: NaiveDate,
}

impl Entity for Property {
    const KIND: EntityKind = EntityKind::Property;
}
