//! The page catalog: the process-wide list of protected resource areas.
//!
//! The catalog is built once at startup and never mutated. Every grant,
//! override, and access check is resolved against it; a page name that is
//! not in the catalog simply does not exist for permission purposes.
//!
//! Historically each screen of the console carried its own copy of this
//! map, and the copies drifted apart (`tasks` vs `Tasks` style key
//! mismatches silently dropped grants). There is exactly one canonical
//! catalog here, and collisions are flagged at load time instead.

use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

/// One catalogued page.
///
/// `key` is the internal identifier the console navigates by; `api_name`
/// is the string the policy store matches grants against. The two are
/// usually equal but are not required to be.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageEntry {
    pub key: String,
    pub api_name: String,
    pub display_name: String,
    #[serde(default)]
    pub route: Option<String>,
}

impl PageEntry {
    fn new(key: &str, display_name: &str, route: &str) -> PageEntry {
        PageEntry {
            key: key.to_string(),
            api_name: key.to_string(),
            display_name: display_name.to_string(),
            route: Some(route.to_string()),
        }
    }
}

/// Catalog construction failures.
///
/// Exact duplicates are configuration bugs and refuse to load. A
/// case-insensitive collision only warns: refusing to boot over it would
/// lock out every user, and exact matching already keeps the colliding
/// entries from granting each other's permissions.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate page key: {0}")]
    DuplicateKey(String),

    #[error("duplicate api name: {0}")]
    DuplicateApiName(String),
}

/// Immutable registry of protected pages.
#[derive(Debug, Clone)]
pub struct PageCatalog {
    entries: Vec<PageEntry>,
    by_key: HashMap<String, usize>,
    by_api_name: HashMap<String, usize>,
}

impl PageCatalog {
    /// Build a catalog, validating for duplicate keys and api names.
    pub fn new(entries: Vec<PageEntry>) -> Result<PageCatalog, CatalogError> {
        let mut by_key = HashMap::with_capacity(entries.len());
        let mut by_api_name = HashMap::with_capacity(entries.len());
        let mut lowered: HashMap<String, &str> = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            if by_key.insert(entry.key.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateKey(entry.key.clone()));
            }
            if by_api_name.insert(entry.api_name.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateApiName(entry.api_name.clone()));
            }
            // Case-insensitive collisions are the bug class that produced
            // `tasks` vs `Tasks` grant drops; surface them loudly.
            if let Some(existing) =
                lowered.insert(entry.api_name.to_lowercase(), entry.api_name.as_str())
                && existing != entry.api_name
            {
                warn!(
                    first = %existing,
                    second = %entry.api_name,
                    "catalog api names collide case-insensitively; grants will only match exactly"
                );
            }
        }

        Ok(PageCatalog {
            entries,
            by_key,
            by_api_name,
        })
    }

    /// The canonical console catalog: dashboard, HR, operations, sales,
    /// and user-management pages.
    pub fn builtin() -> PageCatalog {
        let entries = vec![
            PageEntry::new("admin", "Dashboard", "/Dashboard"),
            // HR
            PageEntry::new("employees", "Employees", "/hr/employees"),
            PageEntry::new("departments", "Departments", "/hr/departments"),
            PageEntry::new("designations", "Designations", "/hr/designations"),
            PageEntry::new("attendance", "Attendance", "/hr/attendance"),
            PageEntry::new("holidays", "Holidays", "/hr/holidays"),
            PageEntry::new("leaves", "Leaves", "/hr/leaves"),
            PageEntry::new("overtime", "Overtime", "/hr/overtime"),
            PageEntry::new("recruitment", "Recruitment", "/hr/recruitment"),
            PageEntry::new("performance", "Performance", "/hr/performance"),
            // Operations
            PageEntry::new("projects", "Projects", "/operations/projects"),
            PageEntry::new("tasks", "Tasks", "/operations/tasks"),
            PageEntry::new("task_board", "Task Board", "/operations/task-board"),
            PageEntry::new("timelogs", "Time Log", "/operations/time-logs"),
            PageEntry::new("task_calendar", "Task Calendar", "/operations/task-calendar"),
            PageEntry::new("scrum", "Scrum", "/operations/scrum"),
            PageEntry::new("contracts", "Contracts", "/operations/contracts"),
            // Sales
            PageEntry::new("leads", "Leads", "/sales/leads"),
            PageEntry::new("pipeline", "Pipeline", "/sales/pipeline"),
            PageEntry::new(
                "communication_tools",
                "Communication Tools",
                "/sales/communication-tools",
            ),
            PageEntry::new("invoices", "Invoices", "/sales/invoices"),
            PageEntry::new("reports", "Reports", "/sales/reports"),
            PageEntry::new("customer", "Clients & Companies", "/sales/customer"),
            // User management
            PageEntry::new("roles", "Roles", "/user-roles/roles"),
            PageEntry::new("users", "Users", "/user-roles/users"),
            PageEntry::new("permissions", "Permissions", "/user-roles/permissions"),
            // Profile
            PageEntry::new("profile", "Profile", "/profile"),
        ];

        // The builtin list is duplicate-free by construction.
        PageCatalog::new(entries).expect("builtin catalog is valid")
    }

    /// Look up a page by internal key. Exact match.
    pub fn get(&self, key: &str) -> Option<&PageEntry> {
        self.by_key.get(key).map(|&idx| &self.entries[idx])
    }

    /// Look up a page by the api name stored grants use. Exact and
    /// case-sensitive: a stale or re-cased name matches nothing.
    pub fn resolve_api_name(&self, api_name: &str) -> Option<&PageEntry> {
        self.by_api_name.get(api_name).map(|&idx| &self.entries[idx])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = PageCatalog::builtin();
        assert!(catalog.len() > 20);
        assert!(catalog.get("employees").is_some());
        assert!(catalog.get("task_board").is_some());
        assert!(catalog.get("nonexistent_page").is_none());
    }

    #[test]
    fn api_name_match_is_case_sensitive() {
        let catalog = PageCatalog::builtin();
        assert!(catalog.resolve_api_name("tasks").is_some());
        assert!(catalog.resolve_api_name("Tasks").is_none());
    }

    #[test]
    fn duplicate_key_rejected() {
        let entries = vec![
            PageEntry::new("tasks", "Tasks", "/tasks"),
            PageEntry::new("tasks", "Tasks Again", "/tasks2"),
        ];
        assert!(matches!(
            PageCatalog::new(entries),
            Err(CatalogError::DuplicateKey(_))
        ));
    }

    #[test]
    fn duplicate_api_name_rejected() {
        let entries = vec![
            PageEntry {
                key: "tasks".into(),
                api_name: "tasks".into(),
                display_name: "Tasks".into(),
                route: None,
            },
            PageEntry {
                key: "task_list".into(),
                api_name: "tasks".into(),
                display_name: "Task List".into(),
                route: None,
            },
        ];
        assert!(matches!(
            PageCatalog::new(entries),
            Err(CatalogError::DuplicateApiName(_))
        ));
    }

    #[test]
    fn case_collision_loads_but_stays_exact() {
        let entries = vec![
            PageEntry {
                key: "tasks".into(),
                api_name: "tasks".into(),
                display_name: "Tasks".into(),
                route: None,
            },
            PageEntry {
                key: "tasks_upper".into(),
                api_name: "Tasks".into(),
                display_name: "Tasks (legacy)".into(),
                route: None,
            },
        ];
        let catalog = PageCatalog::new(entries).unwrap();
        assert_eq!(catalog.resolve_api_name("tasks").unwrap().key, "tasks");
        assert_eq!(
            catalog.resolve_api_name("Tasks").unwrap().key,
            "tasks_upper"
        );
    }
}
