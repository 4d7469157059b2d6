//! Caller identity carried into every service call

use realty_shared::{RecordId, TenantId};

/// The authenticated user performing a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: RecordId,
    pub username: String,
    pub role: String,
}

impl Actor {
    pub fn new(user_id: RecordId, username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            role: role.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub tenant_id: TenantId,
    pub actor: Actor,
}

impl RequestContext {
    pub fn new(tenant_id: impl Into<TenantId>, actor: Actor) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            actor,
        }
    }

    /// Name written into `created_by` / `modified_by`.
    pub fn stamp(&self) -> &str {
        &self.actor.username
    }
}
