//! Buyer (purchaser or customer) entity

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::non_blank;
use super::{Entity, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Buyer {
    #[validate(custom(function = "non_blank"))]
    pub first_name: String,

    #[validate(custom(function = "non_blank"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email"))]
    pub email: String,

    pub phone: Option<String>,
}

impl Entity for Buyer {
    const KIND: EntityKind = EntityKind::Buyer;
}
