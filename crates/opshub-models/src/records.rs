//! Wire-format records exchanged with the policy store.
//!
//! Field names here are the contract: `page`, `can_view`, `can_add`,
//! `can_edit`, `can_delete`, `action`, `is_blocked`,
//! `direct_permissions`, `user_permissions`, `permission_overrides`.
//! Renaming any of them breaks compatibility with the store.

use opshub_core::ActionSet;
use serde::{Deserialize, Serialize};

/// One stored grant: a page's four action bits for a role or a user.
///
/// `page` holds the catalog `api_name`, not the internal key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantRecord {
    pub page: String,
    #[serde(default)]
    pub can_view: bool,
    #[serde(default)]
    pub can_add: bool,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_delete: bool,
}

impl GrantRecord {
    pub fn new(page: impl Into<String>, actions: ActionSet) -> GrantRecord {
        GrantRecord {
            page: page.into(),
            can_view: actions.can_view,
            can_add: actions.can_add,
            can_edit: actions.can_edit,
            can_delete: actions.can_delete,
        }
    }

    pub fn actions(&self) -> ActionSet {
        ActionSet {
            can_view: self.can_view,
            can_add: self.can_add,
            can_edit: self.can_edit,
            can_delete: self.can_delete,
        }
    }
}

/// One stored blocking override. Only records with `is_blocked == true`
/// carry information; a false record is equivalent to no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRecord {
    pub page: String,
    pub action: String,
    pub is_blocked: bool,
}

/// The role reference embedded in a subject profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub id: i64,
    pub name: String,
}

/// `GET subject profile` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectProfile {
    pub id: i64,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub role: Option<RoleProfile>,
}

/// `GET role by id` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDetail {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<GrantRecord>,
}

/// The permission-bearing slice of a `GET user` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPermissions {
    #[serde(default)]
    pub direct_permissions: Vec<GrantRecord>,
    #[serde(default)]
    pub permission_overrides: Vec<OverrideRecord>,
}

/// The write-side payload for saving a user's permission edits. The
/// store accepts direct grants under `user_permissions` on write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPermissionsUpdate {
    pub user_permissions: Vec<GrantRecord>,
    pub permission_overrides: Vec<OverrideRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_record_field_names() {
        let record = GrantRecord::new("employees", ActionSet::VIEW_ONLY);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["page"], "employees");
        assert_eq!(json["can_view"], true);
        assert_eq!(json["can_edit"], false);
    }

    #[test]
    fn subject_profile_tolerates_missing_role() {
        let profile: SubjectProfile =
            serde_json::from_str(r#"{"id": 4, "is_superuser": false}"#).unwrap();
        assert_eq!(profile.id, 4);
        assert!(profile.role.is_none());
    }

    #[test]
    fn grant_record_tolerates_sparse_bits() {
        let record: GrantRecord =
            serde_json::from_str(r#"{"page": "leaves", "can_view": true}"#).unwrap();
        assert!(record.can_view);
        assert!(!record.can_delete);
    }
}
