use brand_registry_api::error::{RegistryError, RegistryResult};
use uuid::Uuid;

use crate::models::account::Role;

/// The acting identity, supplied by the session collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Uuid,
    pub role: Role,
}

/// Capability checked at the handler boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Resolve,
}

/// Explicit capability check: every role may read; Staff and Administrators
/// may write and resolve requests; only Administrators may delete.
pub fn authorize(actor: &Actor, action: Action) -> bool {
    match action {
        Action::View => true,
        Action::Create | Action::Edit | Action::Resolve => {
            matches!(actor.role, Role::Administrator | Role::Staff)
        }
        Action::Delete => actor.role == Role::Administrator,
    }
}

/// `authorize` as a guard clause.
pub fn ensure(actor: &Actor, action: Action) -> RegistryResult<()> {
    if authorize(actor, action) {
        Ok(())
    } else {
        Err(RegistryError::Forbidden(format!(
            "role {} may not perform {action:?}",
            actor.role
        )))
    }
}
