//! Shared fixture builders for the access-service tests.

#![allow(dead_code)]

use opshub_models::{
    GrantRecord, OverrideRecord, RoleDetail, RoleProfile, SubjectProfile, UserPermissions,
};

pub fn subject(id: i64, is_superuser: bool, role: Option<(i64, &str)>) -> SubjectProfile {
    SubjectProfile {
        id,
        is_superuser,
        role: role.map(|(role_id, name)| RoleProfile {
            id: role_id,
            name: name.to_string(),
        }),
    }
}

pub fn grant(page: &str, view: bool, add: bool, edit: bool, delete: bool) -> GrantRecord {
    GrantRecord {
        page: page.to_string(),
        can_view: view,
        can_add: add,
        can_edit: edit,
        can_delete: delete,
    }
}

pub fn block(page: &str, action: &str) -> OverrideRecord {
    OverrideRecord {
        page: page.to_string(),
        action: action.to_string(),
        is_blocked: true,
    }
}

pub fn role(id: i64, name: &str, permissions: Vec<GrantRecord>) -> RoleDetail {
    RoleDetail {
        id,
        name: name.to_string(),
        permissions,
    }
}

pub fn user_permissions(
    direct: Vec<GrantRecord>,
    overrides: Vec<OverrideRecord>,
) -> UserPermissions {
    UserPermissions {
        direct_permissions: direct,
        permission_overrides: overrides,
    }
}
