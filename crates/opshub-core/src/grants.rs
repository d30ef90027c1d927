//! In-memory grant and override sets, keyed by catalog page key.
//!
//! Both wrappers treat absence as all-false: a page with no entry has no
//! allowed actions (for grants) and no blocked actions (for overrides).
//! All-false entries are dropped on insert so "no record" and
//! "all-actions-false record" stay observably identical everywhere.

use crate::action::{ActionKind, ActionSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Positive permission bits per page, for one scope (a role or a user's
/// direct grants).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrantSet {
    pages: BTreeMap<String, ActionSet>,
}

impl GrantSet {
    pub fn new() -> GrantSet {
        GrantSet::default()
    }

    /// The action bits for a page; all-false when the page has no entry.
    pub fn page(&self, page_key: &str) -> ActionSet {
        self.pages.get(page_key).copied().unwrap_or(ActionSet::NONE)
    }

    pub fn allows(&self, page_key: &str, action: ActionKind) -> bool {
        self.page(page_key).get(action)
    }

    /// Set a page's bits. An all-false set removes the entry.
    pub fn insert(&mut self, page_key: impl Into<String>, actions: ActionSet) {
        let key = page_key.into();
        if actions.any() {
            self.pages.insert(key, actions);
        } else {
            self.pages.remove(&key);
        }
    }

    /// OR a page's bits into the set, for merging duplicate records.
    pub fn merge(&mut self, page_key: impl Into<String>, actions: ActionSet) {
        let key = page_key.into();
        let merged = self.page(&key).union(&actions);
        self.insert(key, merged);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActionSet)> {
        self.pages.iter().map(|(key, set)| (key.as_str(), set))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl FromIterator<(String, ActionSet)> for GrantSet {
    fn from_iter<T: IntoIterator<Item = (String, ActionSet)>>(iter: T) -> GrantSet {
        let mut set = GrantSet::new();
        for (key, actions) in iter {
            set.insert(key, actions);
        }
        set
    }
}

/// Blocking overrides per page. A set bit means the action is forced to
/// denied for this user, whatever the grants say. Only user-level
/// overrides exist; there is no role-level equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideSet {
    pages: BTreeMap<String, ActionSet>,
}

impl OverrideSet {
    pub fn new() -> OverrideSet {
        OverrideSet::default()
    }

    pub fn is_blocked(&self, page_key: &str, action: ActionKind) -> bool {
        self.blocked(page_key).get(action)
    }

    /// The blocked bits for a page; all-false when nothing is blocked.
    pub fn blocked(&self, page_key: &str) -> ActionSet {
        self.pages.get(page_key).copied().unwrap_or(ActionSet::NONE)
    }

    /// Mark one (page, action) as blocked.
    pub fn block(&mut self, page_key: impl Into<String>, action: ActionKind) {
        let key = page_key.into();
        let updated = self.blocked(&key).with(action, true);
        self.pages.insert(key, updated);
    }

    /// Clear one blocked bit. Unblocking is the same as the override
    /// never existing; an emptied page entry is removed.
    pub fn unblock(&mut self, page_key: &str, action: ActionKind) {
        if let Some(actions) = self.pages.get_mut(page_key) {
            actions.set(action, false);
            if !actions.any() {
                self.pages.remove(page_key);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActionSet)> {
        self.pages.iter().map(|(key, set)| (key.as_str(), set))
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_page_is_all_false() {
        let grants = GrantSet::new();
        assert_eq!(grants.page("employees"), ActionSet::NONE);
        assert!(!grants.allows("employees", ActionKind::View));
    }

    #[test]
    fn all_false_insert_is_absence() {
        let mut grants = GrantSet::new();
        grants.insert("employees", ActionSet::VIEW_ONLY);
        assert_eq!(grants.len(), 1);

        grants.insert("employees", ActionSet::NONE);
        assert!(grants.is_empty());
    }

    #[test]
    fn merge_ors_duplicate_pages() {
        let mut grants = GrantSet::new();
        grants.merge("leaves", ActionSet::NONE.with(ActionKind::View, true));
        grants.merge("leaves", ActionSet::NONE.with(ActionKind::Edit, true));
        let page = grants.page("leaves");
        assert!(page.can_view && page.can_edit);
        assert!(!page.can_add && !page.can_delete);
    }

    #[test]
    fn unblock_removes_empty_entries() {
        let mut overrides = OverrideSet::new();
        overrides.block("employees", ActionKind::Delete);
        assert!(overrides.is_blocked("employees", ActionKind::Delete));

        overrides.unblock("employees", ActionKind::Delete);
        assert!(overrides.is_empty());
    }
}
