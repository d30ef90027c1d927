//! Subjects and roles as the resolver sees them.

use serde::{Deserialize, Serialize};

/// The role name that, together with the superuser flag, grants an
/// unconditional bypass. The name itself carries the meaning; the role's
/// stored grants are irrelevant for such subjects.
pub const SUPERADMIN_ROLE: &str = "Superadmin";

/// A role as referenced from a subject profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    pub id: i64,
    pub name: String,
}

/// The identity facts the resolver needs about a user.
///
/// `role` is optional: a user with direct permissions and no role is a
/// normal, supported configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub is_superuser: bool,
    #[serde(default)]
    pub role: Option<RoleRef>,
}

impl Subject {
    /// True when the subject bypasses permission resolution entirely:
    /// the superuser flag is set, or the assigned role is `"Superadmin"`.
    /// The bypass is decided before overrides are consulted.
    pub fn is_unrestricted(&self) -> bool {
        self.is_superuser
            || self
                .role
                .as_ref()
                .is_some_and(|role| role.name == SUPERADMIN_ROLE)
    }
}

/// Error for mutations aimed at a structurally protected role.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("role \"{0}\" is protected and cannot be modified or deleted")]
pub struct ProtectedRoleError(pub String);

/// Reject edits and deletions of structurally protected roles.
///
/// Called at the mutation boundary so the caller gets an explicit "not
/// permitted" outcome rather than a silent no-op.
pub fn ensure_role_mutable(role_name: &str) -> Result<(), ProtectedRoleError> {
    if role_name == SUPERADMIN_ROLE {
        return Err(ProtectedRoleError(role_name.to_string()));
    }
    Ok(())
}
