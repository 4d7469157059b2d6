// ============================================================================
// Realty Core - Permission Gate
// File: crates/realty-core/src/services/permission_gate.rs
// Description: Role to operation allow/deny lookup, fail-closed
// ============================================================================

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::warn;

use crate::domain::EntityKind;
use crate::error::DomainError;
use crate::services::context::Actor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    View,
    Create,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::View, Action::Create, Action::Update, Action::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation name as stored in role grants, e.g. `create_commission`.
pub fn operation_name(action: Action, kind: EntityKind) -> String {
    format!("{}_{}", action.as_str(), kind.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Static mapping from role name to the operations it may perform.
///
/// Anything not granted explicitly is denied, including unknown roles and
/// unknown operation names.
#[derive(Debug, Clone, Default)]
pub struct PermissionGate {
    grants: HashMap<String, HashSet<String>>,
}

impl PermissionGate {
    pub fn new(grants: HashMap<String, HashSet<String>>) -> Self {
        Self { grants }
    }

    /// Build from the `permissions` config section, falling back to the
    /// built-in policy when the section is empty.
    pub fn from_config(permissions: &HashMap<String, Vec<String>>) -> Self {
        if permissions.is_empty() {
            return Self::with_default_policy();
        }

        let known = all_operations();
        let mut gate = Self::default();
        for (role, operations) in permissions {
            for operation in operations {
                if !known.contains(operation) {
                    warn!("Role {} grants unknown operation {}", role, operation);
                }
            }
            gate = gate.grant(role, operations.iter().cloned());
        }
        gate
    }

    /// Roles `admin`, `manager`, `sales`, and `viewer`.
    pub fn with_default_policy() -> Self {
        let entity_kinds = || EntityKind::ALL.into_iter().filter(|k| *k != EntityKind::User);

        let admin = all_operations();

        let manager = entity_kinds()
            .flat_map(|kind| Action::ALL.into_iter().map(move |action| operation_name(action, kind)))
            .collect::<Vec<_>>();

        let mut sales: Vec<String> = entity_kinds().map(|kind| operation_name(Action::View, kind)).collect();
        for kind in [
            EntityKind::Sale,
            EntityKind::Letting,
            EntityKind::Introduction,
            EntityKind::Buyer,
            EntityKind::Property,
            EntityKind::InstallmentPlan,
            EntityKind::Installment,
            EntityKind::Payment,
        ] {
            sales.push(operation_name(Action::Create, kind));
            sales.push(operation_name(Action::Update, kind));
        }
        sales.push(operation_name(Action::Create, EntityKind::Commission));

        let viewer = EntityKind::ALL
            .into_iter()
            .map(|kind| operation_name(Action::View, kind))
            .collect::<Vec<_>>();

        Self::default()
            .grant("admin", admin)
            .grant("manager", manager)
            .grant("sales", sales)
            .grant("viewer", viewer)
    }

    pub fn grant<I, S>(mut self, role: &str, operations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grants
            .entry(role.to_string())
            .or_default()
            .extend(operations.into_iter().map(Into::into));
        self
    }

    pub fn check(&self, role: &str, operation: &str) -> Decision {
        match self.grants.get(role) {
            Some(operations) if operations.contains(operation) => Decision::Allow,
            _ => Decision::Deny,
        }
    }

    /// Gate a request. Must run before any repository call.
    pub fn authorize(&self, actor: &Actor, operation: &str) -> Result<(), DomainError> {
        match self.check(&actor.role, operation) {
            Decision::Allow => Ok(()),
            Decision::Deny => {
                warn!(
                    "Permission denied: user {} (role {}) attempted {}",
                    actor.username, actor.role, operation
                );
                Err(DomainError::PermissionDenied(operation.to_string()))
            }
        }
    }

    pub fn authorize_action(&self, actor: &Actor, action: Action, kind: EntityKind) -> Result<(), DomainError> {
        self.authorize(actor, &operation_name(action, kind))
    }
}

fn all_operations() -> HashSet<String> {
    EntityKind::ALL
        .into_iter()
        .flat_map(|kind| Action::ALL.into_iter().map(move |action| operation_name(action, kind)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names() {
        assert_eq!(operation_name(Action::Create, EntityKind::Commission), "create_commission");
        assert_eq!(operation_name(Action::View, EntityKind::InstallmentPlan), "view_plan");
        assert_eq!(operation_name(Action::Delete, EntityKind::LocationPricing), "delete_pricing");
        assert_eq!(all_operations().len(), EntityKind::ALL.len() * Action::ALL.len());
    }

    #[test]
    fn test_fail_closed() {
        let gate = PermissionGate::with_default_policy();
        assert_eq!(gate.check("intern", "view_sale"), Decision::Deny);
        assert_eq!(gate.check("admin", "launch_rocket"), Decision::Deny);
        assert_eq!(gate.check("", ""), Decision::Deny);
        assert_eq!(PermissionGate::default().check("admin", "view_sale"), Decision::Deny);
    }

    #[test]
    fn test_default_policy() {
        let gate = PermissionGate::with_default_policy();

        assert!(gate.check("admin", "delete_user").is_allowed());
        assert!(gate.check("manager", "delete_commission").is_allowed());
        assert!(!gate.check("manager", "create_user").is_allowed());

        assert!(gate.check("sales", "create_commission").is_allowed());
        assert!(gate.check("sales", "view_commission").is_allowed());
        assert!(gate.check("sales", "update_sale").is_allowed());
        assert!(!gate.check("sales", "update_commission").is_allowed());
        assert!(!gate.check("sales", "delete_sale").is_allowed());
        assert!(!gate.check("sales", "view_user").is_allowed());
        assert!(!gate.check("sales", "create_pricing").is_allowed());

        assert!(gate.check("viewer", "view_pricing").is_allowed());
        assert!(!gate.check("viewer", "create_commission").is_allowed());
    }

    #[test]
    fn test_from_config_overrides_policy() {
        let mut permissions = HashMap::new();
        permissions.insert("auditor".to_string(), vec!["view_commission".to_string()]);
        let gate = PermissionGate::from_config(&permissions);

        assert!(gate.check("auditor", "view_commission").is_allowed());
        assert!(!gate.check("admin", "view_commission").is_allowed());

        let gate = PermissionGate::from_config(&HashMap::new());
        assert!(gate.check("admin", "view_commission").is_allowed());
    }

    #[test]
    fn test_authorize_returns_permission_denied() {
        let gate = PermissionGate::with_default_policy();
        let actor = Actor::new(7, "vic", "viewer");

        assert!(gate.authorize(&actor, "view_sale").is_ok());
        let err = gate
            .authorize_action(&actor, Action::Create, EntityKind::Commission)
            .unwrap_err();
        assert_eq!(err, DomainError::PermissionDenied("create_commission".into()));
    }
}
