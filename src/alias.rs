//! Page-alias fallbacks consulted when a primary access check denies.
//!
//! The console's screens and the store's stored page names drifted over
//! the product's life: the user list checks `users` while grants were
//! written against `employees`, clients live on the `customer` page, and
//! a handful of list screens need view access to neighbouring modules
//! for their dropdowns. These pairs are load-bearing compatibility rules,
//! not conveniences; removing one locks real users out of screens they
//! could previously reach.
//!
//! Fallbacks apply only at access-check time. The compiler and resolver
//! always match page names exactly.

use opshub_core::ActionKind;

/// Additional (page, action) pairs to check, in order, after the primary
/// (page, action) check has denied. An empty result means the primary
/// decision stands.
pub fn fallbacks(page_key: &str, action: ActionKind) -> Vec<(&'static str, ActionKind)> {
    let mut candidates: Vec<(&'static str, ActionKind)> = Vec::new();

    // Same-action synonyms.
    match page_key {
        "users" => candidates.push(("employees", action)),
        "roles" => candidates.push(("designations", action)),
        "clients" | "client" => candidates.push(("customer", action)),
        "reports" => candidates.push(("communication_tools", action)),
        "communication_tools" => candidates.push(("reports", action)),
        _ => {}
    }

    // View-only conveniences for list screens and dropdowns.
    if action == ActionKind::View {
        match page_key {
            // Leads screens need client and company lists.
            "customer" | "clients" | "client" | "companies" => {
                candidates.push(("leads", ActionKind::View));
            }
            // Employee filters need role and department metadata.
            "roles" | "departments" => {
                candidates.push(("employees", ActionKind::View));
            }
            // The header clock-in widget reads attendance status.
            "attendance" => {
                candidates.push(("admin", ActionKind::View));
                candidates.push(("employees", ActionKind::View));
            }
            "reports" | "communication_tools" => {
                candidates.push(("leads", ActionKind::View));
            }
            _ => {}
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_falls_back_to_employees_for_every_action() {
        for action in ActionKind::ALL {
            assert!(fallbacks("users", action).contains(&("employees", action)));
        }
    }

    #[test]
    fn view_conveniences_do_not_apply_to_writes() {
        assert!(fallbacks("departments", ActionKind::View)
            .contains(&("employees", ActionKind::View)));
        assert!(fallbacks("departments", ActionKind::Delete).is_empty());
        assert!(fallbacks("attendance", ActionKind::Edit).is_empty());
    }

    #[test]
    fn unrelated_pages_have_no_fallbacks() {
        assert!(fallbacks("holidays", ActionKind::View).is_empty());
        assert!(fallbacks("nonexistent_page", ActionKind::View).is_empty());
    }
}
