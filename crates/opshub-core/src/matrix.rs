//! Bulk-edit operations for the permission matrix editors.
//!
//! The console has three matrix editors: role grants, a user's direct
//! grants, and a user's blocking overrides. They differ only in styling
//! and in where the result is persisted; the select-all / clear-all /
//! single-toggle algorithm is this one module for all three. Each
//! operation returns a fresh snapshot — the editors share map instances
//! across tabs, and an in-place mutation would cross-contaminate them.

use crate::action::{ActionKind, ActionSet};
use crate::catalog::PageCatalog;
use crate::grants::GrantSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which editing surface a matrix edit session is for. Persistence and
/// presentation differ per target; the edit logic never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorTarget {
    RoleGrants,
    DirectGrants,
    Overrides,
}

/// An open matrix edit session: every catalogued page gets an explicit
/// cell, including all-false ones, because the editor renders a toggle
/// for each. Normalization back to "absent" happens when the session is
/// converted to a [`GrantSet`] for persistence.
pub type MatrixCells = BTreeMap<String, ActionSet>;

/// Every page × action set to true.
pub fn select_all(catalog: &PageCatalog) -> MatrixCells {
    catalog
        .iter()
        .map(|entry| (entry.key.clone(), ActionSet::ALL))
        .collect()
}

/// Every page × action set to false.
pub fn clear_all(catalog: &PageCatalog) -> MatrixCells {
    catalog
        .iter()
        .map(|entry| (entry.key.clone(), ActionSet::NONE))
        .collect()
}

/// A copy of `cells` with exactly one cell changed. The input snapshot is
/// left untouched.
pub fn toggle_one(
    cells: &MatrixCells,
    page_key: &str,
    action: ActionKind,
    value: bool,
) -> MatrixCells {
    let mut next = cells.clone();
    let updated = next.get(page_key).copied().unwrap_or(ActionSet::NONE);
    next.insert(page_key.to_string(), updated.with(action, value));
    next
}

/// Expand a stored grant set into editor cells over the full catalog.
pub fn cells_from_grants(catalog: &PageCatalog, grants: &GrantSet) -> MatrixCells {
    catalog
        .iter()
        .map(|entry| (entry.key.clone(), grants.page(&entry.key)))
        .collect()
}

/// Collapse editor cells back into the normalized stored form, dropping
/// all-false pages.
pub fn grants_from_cells(cells: &MatrixCells) -> GrantSet {
    cells
        .iter()
        .map(|(key, actions)| (key.clone(), *actions))
        .collect()
}

/// The grants a freshly created role starts with: view access to the
/// baseline console pages, nothing else.
pub fn default_role_grants(catalog: &PageCatalog) -> GrantSet {
    const DEFAULT_VIEW_PAGES: [&str; 14] = [
        "admin",
        "employees",
        "departments",
        "designations",
        "attendance",
        "holidays",
        "leaves",
        "overtime",
        "recruitment",
        "performance",
        "profile",
        "users",
        "roles",
        "permissions",
    ];

    let mut grants = GrantSet::new();
    for key in DEFAULT_VIEW_PAGES {
        if catalog.contains_key(key) {
            grants.insert(key, ActionSet::VIEW_ONLY);
        }
    }
    grants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all_is_idempotent() {
        let catalog = PageCatalog::builtin();
        let once = select_all(&catalog);
        assert_eq!(once.len(), catalog.len());
        assert!(once.values().all(|set| *set == ActionSet::ALL));
        assert_eq!(select_all(&catalog), once);
    }

    #[test]
    fn clear_all_is_idempotent() {
        let catalog = PageCatalog::builtin();
        let once = clear_all(&catalog);
        assert_eq!(once.len(), catalog.len());
        assert!(once.values().all(|set| *set == ActionSet::NONE));
        assert_eq!(clear_all(&catalog), once);
    }

    #[test]
    fn toggle_changes_one_cell_and_preserves_the_rest() {
        let catalog = PageCatalog::builtin();
        let cells = clear_all(&catalog);
        let toggled = toggle_one(&cells, "employees", ActionKind::Edit, true);

        assert!(toggled["employees"].can_edit);
        for (key, actions) in &toggled {
            if key != "employees" {
                assert_eq!(*actions, ActionSet::NONE);
            }
        }
        // The input snapshot is untouched.
        assert_eq!(cells["employees"], ActionSet::NONE);
    }

    #[test]
    fn double_toggle_same_value_is_a_no_op() {
        let catalog = PageCatalog::builtin();
        let cells = clear_all(&catalog);
        let once = toggle_one(&cells, "leaves", ActionKind::View, true);
        let twice = toggle_one(&once, "leaves", ActionKind::View, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn cells_round_trip_through_normalized_grants() {
        let catalog = PageCatalog::builtin();
        let cells = toggle_one(&clear_all(&catalog), "tasks", ActionKind::Add, true);
        let grants = grants_from_cells(&cells);

        // Only the one non-empty page survives normalization.
        assert_eq!(grants.len(), 1);
        assert!(grants.allows("tasks", ActionKind::Add));

        let reopened = cells_from_grants(&catalog, &grants);
        assert_eq!(reopened, cells);
    }

    #[test]
    fn default_role_grants_are_view_only() {
        let catalog = PageCatalog::builtin();
        let grants = default_role_grants(&catalog);
        assert!(grants.allows("employees", ActionKind::View));
        assert!(!grants.allows("employees", ActionKind::Delete));
        // Operations and sales pages are not part of the baseline.
        assert!(!grants.allows("tasks", ActionKind::View));
        assert!(!grants.allows("leads", ActionKind::View));
    }
}
