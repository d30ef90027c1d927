//! # Opshub Models
//!
//! Wire models for the policy-store contract and the grant compiler
//! that translates between stored records and the in-memory sets the
//! resolver works with.

pub mod codec;
pub mod records;

// Re-export commonly used types at crate root
pub use codec::{decode_grants, decode_overrides, encode_grants, encode_overrides};
pub use records::{
    GrantRecord, OverrideRecord, RoleDetail, RoleProfile, SubjectProfile, UserPermissions,
    UserPermissionsUpdate,
};
