//! Resolve the acting user for a request

use tracing::warn;

use crate::domain::User;
use crate::error::DomainError;
use crate::repositories::DynRepository;
use crate::services::context::{Actor, RequestContext};
use realty_shared::{RecordId, TenantId};

/// Turns an authenticated user id into a [`RequestContext`].
///
/// Users who are missing, deleted, or belong to another tenant are refused.
#[derive(Clone)]
pub struct ActorResolver {
    users: DynRepository<User>,
}

impl ActorResolver {
    pub fn new(users: DynRepository<User>) -> Self {
        Self { users }
    }

    pub async fn resolve(&self, tenant_id: &TenantId, user_id: RecordId) -> Result<RequestContext, DomainError> {
        let user = match self.users.get_by_id(tenant_id, user_id).await {
            Ok(user) => user,
            Err(DomainError::NotFound(_)) => {
                warn!("Unknown user {} for tenant {}", user_id, tenant_id);
                return Err(DomainError::PermissionDenied("unknown user".into()));
            }
            Err(err) => return Err(err),
        };

        let actor = Actor::new(user.id, user.data.username, user.data.role);
        Ok(RequestContext::new(tenant_id.clone(), actor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::repositories::{InMemoryRepository, TenantRepository};
    use std::sync::Arc;

    fn user(role: &str) -> User {
        User {
            username: "dana".to_string(),
            password_hash: "hash".to_string(),
            first_name: "Dana".to_string(),
            last_name: "Scully".to_string(),
            role: role.to_string(),
            email: "dana@example.com".to_string(),
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_resolves_role_and_username() {
        let users: Arc<InMemoryRepository<User>> = Arc::new(InMemoryRepository::new());
        let tenant = TenantId::new("t1");
        let id = users.create(&tenant, "seed", user("manager")).await.unwrap();

        let ctx = ActorResolver::new(users).resolve(&tenant, id).await.unwrap();
        assert_eq!(ctx.actor, Actor::new(id, "dana", "manager"));
        assert_eq!(ctx.tenant_id, tenant);
    }

    #[tokio::test]
    async fn test_deleted_or_foreign_user_denied() {
        let users: Arc<InMemoryRepository<User>> = Arc::new(InMemoryRepository::new());
        let tenant = TenantId::new("t1");
        let id = users.create(&tenant, "seed", user("admin")).await.unwrap();
        let resolver = ActorResolver::new(users.clone());

        let err = resolver.resolve(&TenantId::new("t2"), id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);

        users.soft_delete(&tenant, "seed", id).await.unwrap();
        let err = resolver.resolve(&tenant, id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    }
}
