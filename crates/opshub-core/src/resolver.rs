//! The permission resolver: merges role grants, direct grants, and
//! blocking overrides into one effective matrix for a subject.
//!
//! `resolve` is a pure function over immutable snapshots of its inputs.
//! It never fails, never logs, and is safe to call from any number of
//! readers concurrently. Staleness is handled by the caller re-resolving
//! whenever any input grant changes; nothing here is cached.

use crate::action::{ActionKind, ActionSet};
use crate::catalog::PageCatalog;
use crate::grants::{GrantSet, OverrideSet};
use crate::subject::Subject;
use serde::Serialize;
use std::collections::BTreeMap;

/// The final allow/deny decision for every catalogued page and action.
///
/// Serializes to the profile shape the console consumes:
/// `{ "employees": { "can_view": true, ... }, ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EffectiveMatrix {
    pages: BTreeMap<String, ActionSet>,
}

impl EffectiveMatrix {
    /// Whether the subject may perform `action` on `page_key`.
    ///
    /// Pages outside the catalog were never materialized and answer
    /// `false` — default-deny governs even for unrestricted subjects.
    pub fn allows(&self, page_key: &str, action: ActionKind) -> bool {
        self.page(page_key).get(action)
    }

    pub fn page(&self, page_key: &str) -> ActionSet {
        self.pages.get(page_key).copied().unwrap_or(ActionSet::NONE)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActionSet)> {
        self.pages.iter().map(|(key, set)| (key.as_str(), set))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }
}

/// Compute the effective permission matrix for one subject.
///
/// Unrestricted subjects (superuser flag, or the `"Superadmin"` role by
/// name) get every action on every catalogued page; the bypass is decided
/// before overrides are looked at, so a blocked override never binds a
/// superuser. For everyone else, per page and action:
///
/// ```text
/// effective = (role_bit OR direct_bit) AND NOT blocked
/// ```
///
/// with every absent input defaulting to false.
pub fn resolve(
    subject: &Subject,
    catalog: &PageCatalog,
    role_grants: &GrantSet,
    direct_grants: &GrantSet,
    overrides: &OverrideSet,
) -> EffectiveMatrix {
    if subject.is_unrestricted() {
        let pages = catalog
            .iter()
            .map(|entry| (entry.key.clone(), ActionSet::ALL))
            .collect();
        return EffectiveMatrix { pages };
    }

    let pages = catalog
        .iter()
        .map(|entry| {
            let base = role_grants
                .page(&entry.key)
                .union(&direct_grants.page(&entry.key));
            let effective = base.minus(&overrides.blocked(&entry.key));
            (entry.key.clone(), effective)
        })
        .collect();

    EffectiveMatrix { pages }
}
