//! Agency staff account

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::non_blank;
use super::{Entity, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    #[validate(custom(function = "non_blank"))]
    pub username: String,

    /// Opaque hash produced outside this crate. Never serialized outward.
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    #[validate(custom(function = "non_blank"))]
    pub first_name: String,

    #[validate(custom(function = "non_blank"))]
    pub last_name: String,

    /// Role name looked up by the permission gate, e.g. "admin" or "sales".
    #[validate(custom(function = "non_blank"))]
    pub role: String,

    #[validate(email(message = "Invalid email"))]
    pub email: String,

    pub phone: Option<String>,
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;
}
