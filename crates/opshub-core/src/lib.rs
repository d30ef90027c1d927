//! # Opshub Core
//!
//! The pure permission-resolution engine for the opshub admin console.
//!
//! This crate has no I/O and no async: it defines the grant data model
//! and the algorithms that turn stored grants into effective decisions.
//!
//! - [`action`]: the closed view/add/edit/delete vocabulary
//! - [`catalog`]: the immutable page catalog
//! - [`subject`]: subjects, roles, and the superuser bypass rule
//! - [`grants`]: grant and override sets with absence-means-false
//! - [`resolver`]: `(role OR direct) AND NOT blocked` matrix resolution
//! - [`matrix`]: bulk-edit operations shared by all three matrix editors

pub mod action;
pub mod catalog;
pub mod grants;
pub mod matrix;
pub mod resolver;
pub mod subject;

// Re-export commonly used types at crate root
pub use action::{ActionKind, ActionSet};
pub use catalog::{CatalogError, PageCatalog, PageEntry};
pub use grants::{GrantSet, OverrideSet};
pub use resolver::{EffectiveMatrix, resolve};
pub use subject::{ProtectedRoleError, RoleRef, SUPERADMIN_ROLE, Subject, ensure_role_mutable};
