//! Wire-contract tests: the policy-store JSON shapes decode into the
//! canonical model and re-encode with the exact field names the store
//! expects.

mod common;

use common::{block, grant};
use opshub_core::{ActionKind, PageCatalog};
use opshub_models::{
    GrantRecord, RoleDetail, SubjectProfile, UserPermissions, UserPermissionsUpdate, decode_grants,
    decode_overrides, encode_grants, encode_overrides,
};

#[test]
fn user_document_decodes_both_slices() {
    // The store returns one user document; profile and permissions are
    // two decodings of it, and unrelated fields are ignored.
    let raw = r#"{
        "id": 42,
        "email": "dana@example.com",
        "name": "Dana",
        "is_superuser": false,
        "role": { "id": 3, "name": "Manager" },
        "direct_permissions": [
            { "page": "employees", "can_view": true, "can_edit": true },
            { "page": "old_reports_page", "can_view": true }
        ],
        "permission_overrides": [
            { "page": "employees", "action": "edit", "is_blocked": true },
            { "page": "employees", "action": "publish", "is_blocked": true },
            { "page": "leaves", "action": "view", "is_blocked": false }
        ]
    }"#;

    let profile: SubjectProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.id, 42);
    assert_eq!(profile.role.as_ref().unwrap().name, "Manager");

    let permissions: UserPermissions = serde_json::from_str(raw).unwrap();
    let catalog = PageCatalog::builtin();

    let direct = decode_grants(&catalog, &permissions.direct_permissions);
    // The stale page is skipped, not fatal.
    assert_eq!(direct.len(), 1);
    assert!(direct.allows("employees", ActionKind::View));
    assert!(direct.allows("employees", ActionKind::Edit));

    let overrides = decode_overrides(&catalog, &permissions.permission_overrides);
    // The malformed action and the unblocked record are both dropped.
    assert!(overrides.is_blocked("employees", ActionKind::Edit));
    assert!(!overrides.is_blocked("employees", ActionKind::View));
    assert!(!overrides.is_blocked("leaves", ActionKind::View));
}

#[test]
fn role_document_decodes_permissions() {
    let raw = r#"{
        "id": 3,
        "name": "Manager",
        "permissions": [
            { "page": "employees", "can_view": true, "can_add": true,
              "can_edit": false, "can_delete": false },
            { "page": "leaves", "can_view": true }
        ]
    }"#;

    let detail: RoleDetail = serde_json::from_str(raw).unwrap();
    let catalog = PageCatalog::builtin();
    let grants = decode_grants(&catalog, &detail.permissions);

    assert!(grants.allows("employees", ActionKind::Add));
    assert!(grants.allows("leaves", ActionKind::View));
    assert!(!grants.allows("leaves", ActionKind::Delete));
}

#[test]
fn update_payload_uses_write_side_field_names() {
    let catalog = PageCatalog::builtin();
    let direct = decode_grants(&catalog, &[grant("employees", true, false, false, false)]);
    let overrides = decode_overrides(&catalog, &[block("tasks", "delete")]);

    let update = UserPermissionsUpdate {
        user_permissions: encode_grants(&catalog, &direct),
        permission_overrides: encode_overrides(&catalog, &overrides),
    };

    let json = serde_json::to_value(&update).unwrap();
    assert!(json.get("user_permissions").is_some());
    assert!(json.get("permission_overrides").is_some());
    assert_eq!(json["user_permissions"][0]["page"], "employees");
    assert_eq!(json["permission_overrides"][0]["action"], "delete");
    assert_eq!(json["permission_overrides"][0]["is_blocked"], true);
}

#[test]
fn all_false_grants_are_not_persisted() {
    let catalog = PageCatalog::builtin();
    let records = vec![
        grant("employees", true, false, false, false),
        grant("leaves", false, false, false, false),
    ];
    let decoded = decode_grants(&catalog, &records);
    let encoded: Vec<GrantRecord> = encode_grants(&catalog, &decoded);

    // Clearing every action on a page is the same as deleting its record.
    assert_eq!(encoded.len(), 1);
    assert_eq!(encoded[0].page, "employees");
}
