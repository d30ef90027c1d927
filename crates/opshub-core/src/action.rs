//! The fixed action vocabulary of the permission matrix.
//!
//! Every protected page carries exactly four actions: `view`, `add`,
//! `edit`, `delete`. There is no fifth action anywhere in the system, so
//! both the enum and the four-bool bundle below are closed types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four actions a subject can be granted on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    View,
    Add,
    Edit,
    Delete,
}

impl ActionKind {
    /// All actions, in matrix column order.
    pub const ALL: [ActionKind; 4] = [
        ActionKind::View,
        ActionKind::Add,
        ActionKind::Edit,
        ActionKind::Delete,
    ];

    /// The lowercase wire name (`view`, `add`, `edit`, `delete`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::View => "view",
            ActionKind::Add => "add",
            ActionKind::Edit => "edit",
            ActionKind::Delete => "delete",
        }
    }

    /// Parse a wire action name. Matching is exact; anything else is
    /// `None` and the caller decides whether to skip or deny.
    pub fn parse(name: &str) -> Option<ActionKind> {
        match name {
            "view" => Some(ActionKind::View),
            "add" => Some(ActionKind::Add),
            "edit" => Some(ActionKind::Edit),
            "delete" => Some(ActionKind::Delete),
            _ => None,
        }
    }

    /// Map an HTTP method to the action it implies for route guarding:
    /// GET → view, POST → add, PUT/PATCH → edit, DELETE → delete.
    /// Other methods carry no permission meaning and map to `None`.
    pub fn from_http_method(method: &str) -> Option<ActionKind> {
        match method {
            "GET" => Some(ActionKind::View),
            "POST" => Some(ActionKind::Add),
            "PUT" | "PATCH" => Some(ActionKind::Edit),
            "DELETE" => Some(ActionKind::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four action bits for one page.
///
/// Serializes with the policy-store field names (`can_view`, `can_add`,
/// `can_edit`, `can_delete`), which are part of the wire contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSet {
    #[serde(default)]
    pub can_view: bool,
    #[serde(default)]
    pub can_add: bool,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_delete: bool,
}

impl ActionSet {
    /// No actions allowed. Identical to the absence of a grant record.
    pub const NONE: ActionSet = ActionSet {
        can_view: false,
        can_add: false,
        can_edit: false,
        can_delete: false,
    };

    /// All four actions allowed.
    pub const ALL: ActionSet = ActionSet {
        can_view: true,
        can_add: true,
        can_edit: true,
        can_delete: true,
    };

    /// A view-only set, the default granted to freshly created roles.
    pub const VIEW_ONLY: ActionSet = ActionSet {
        can_view: true,
        can_add: false,
        can_edit: false,
        can_delete: false,
    };

    pub fn get(&self, action: ActionKind) -> bool {
        match action {
            ActionKind::View => self.can_view,
            ActionKind::Add => self.can_add,
            ActionKind::Edit => self.can_edit,
            ActionKind::Delete => self.can_delete,
        }
    }

    pub fn set(&mut self, action: ActionKind, value: bool) {
        match action {
            ActionKind::View => self.can_view = value,
            ActionKind::Add => self.can_add = value,
            ActionKind::Edit => self.can_edit = value,
            ActionKind::Delete => self.can_delete = value,
        }
    }

    /// Copy of `self` with one bit changed.
    pub fn with(mut self, action: ActionKind, value: bool) -> ActionSet {
        self.set(action, value);
        self
    }

    /// True when at least one action is allowed. An all-false set carries
    /// no information and is normalized away at the storage boundary.
    pub fn any(&self) -> bool {
        self.can_view || self.can_add || self.can_edit || self.can_delete
    }

    /// Per-bit OR of two sets.
    pub fn union(&self, other: &ActionSet) -> ActionSet {
        ActionSet {
            can_view: self.can_view || other.can_view,
            can_add: self.can_add || other.can_add,
            can_edit: self.can_edit || other.can_edit,
            can_delete: self.can_delete || other.can_delete,
        }
    }

    /// Clear every bit that is set in `blocked`.
    pub fn minus(&self, blocked: &ActionSet) -> ActionSet {
        ActionSet {
            can_view: self.can_view && !blocked.can_view,
            can_add: self.can_add && !blocked.can_add,
            can_edit: self.can_edit && !blocked.can_edit,
            can_delete: self.can_delete && !blocked.can_delete,
        }
    }
}
