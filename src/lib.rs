//! # Opshub Access
//!
//! Effective-permission resolution for the opshub admin console.
//!
//! The console is page-oriented: every protected area is a catalogued
//! page with exactly four actions (`view`, `add`, `edit`, `delete`).
//! A user's effective permission for a page/action combines three
//! inputs owned by the external policy store:
//!
//! - the grants of the user's role (zero or one role per user),
//! - the user's direct grants,
//! - the user's blocking overrides.
//!
//! merged as `(role OR direct) AND NOT blocked`, with superusers and
//! the `"Superadmin"` role bypassing resolution entirely. Absence of
//! data always resolves to denial.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── opshub-core/      # pure engine: catalog, resolver, bulk mutators
//! └── opshub-models/    # policy-store wire DTOs and the grant codec
//! src/
//! ├── store.rs          # PolicyStore trait, REST client, fixture store
//! ├── access.rs         # AccessService: can_access / effective_matrix
//! ├── alias.rs          # page-alias fallback rules
//! ├── config.rs         # env config and catalog loading
//! ├── logging.rs        # tracing setup
//! └── bin/permcheck.rs  # diagnostic CLI
//! ```
//!
//! Route guards and UI affordances talk to [`AccessService`] only. The
//! service fails closed: if the policy store cannot be reached, the
//! answer is "no", never an exception in guard position.

pub mod access;
pub mod alias;
pub mod config;
pub mod logging;
pub mod store;

// Re-export commonly used types at crate root
pub use access::{AccessError, AccessService};
pub use config::{AccessConfig, ConfigError, load_catalog};
pub use store::{MemoryPolicyStore, PolicyFixture, PolicyStore, RestPolicyStore, StoreError};
