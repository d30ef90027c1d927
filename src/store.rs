//! The policy-store boundary.
//!
//! The store owns users, roles, and permission records; this crate only
//! reads them. [`PolicyStore`] is the seam: [`RestPolicyStore`] speaks to
//! the real HTTP store, [`MemoryPolicyStore`] serves fixtures for tests
//! and the `permcheck` CLI. Grants can change between requests, so every
//! access check re-fetches; nothing is cached across calls.

use opshub_models::{RoleDetail, SubjectProfile, UserPermissions};
use serde::Deserialize;

/// Failures at the store boundary. These are the only errors the access
/// path can produce, and the access service converts them all to "deny".
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("policy store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("policy store returned a malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("subject {0} not found in policy store")]
    SubjectNotFound(i64),
}

/// Read access to the policy store, in the order the access service
/// needs it: subject profile first, then the subject's role, then the
/// user-level grants and overrides.
pub trait PolicyStore {
    /// Fetch a subject's identity profile.
    fn fetch_subject(
        &self,
        subject_id: i64,
    ) -> impl Future<Output = Result<SubjectProfile, StoreError>> + Send;

    /// Fetch a role by id. `Ok(None)` means the role no longer exists —
    /// a normal race when a role is deleted between the profile read and
    /// this one, and the caller falls back to direct grants only.
    fn fetch_role(
        &self,
        role_id: i64,
    ) -> impl Future<Output = Result<Option<RoleDetail>, StoreError>> + Send;

    /// Fetch a subject's direct grants and blocking overrides.
    fn fetch_user_permissions(
        &self,
        subject_id: i64,
    ) -> impl Future<Output = Result<UserPermissions, StoreError>> + Send;
}

/// HTTP client for the real policy store.
///
/// The store exposes the full user document at `/auth/users/{id}/`;
/// the subject profile and the permission slice are two decodings of
/// the same endpoint, and roles live at `/auth/roles/{id}/`.
#[derive(Debug, Clone)]
pub struct RestPolicyStore {
    base_url: String,
    client: reqwest::Client,
}

impl RestPolicyStore {
    pub fn new(base_url: impl Into<String>) -> RestPolicyStore {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        RestPolicyStore {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn user_url(&self, subject_id: i64) -> String {
        format!("{}/auth/users/{}/", self.base_url, subject_id)
    }
}

impl PolicyStore for RestPolicyStore {
    async fn fetch_subject(&self, subject_id: i64) -> Result<SubjectProfile, StoreError> {
        let response = self.client.get(self.user_url(subject_id)).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::SubjectNotFound(subject_id));
        }
        Ok(response.error_for_status()?.json().await?)
    }

    async fn fetch_role(&self, role_id: i64) -> Result<Option<RoleDetail>, StoreError> {
        let url = format!("{}/auth/roles/{}/", self.base_url, role_id);
        let response = self.client.get(url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(response.error_for_status()?.json().await?))
    }

    async fn fetch_user_permissions(&self, subject_id: i64) -> Result<UserPermissions, StoreError> {
        let response = self.client.get(self.user_url(subject_id)).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::SubjectNotFound(subject_id));
        }
        Ok(response.error_for_status()?.json().await?)
    }
}

/// A self-contained policy snapshot for one subject, loadable from a
/// JSON file. This is the `permcheck` fixture format.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFixture {
    pub subject: SubjectProfile,
    #[serde(default)]
    pub role: Option<RoleDetail>,
    #[serde(default)]
    pub permissions: UserPermissions,
}

/// In-process policy store over fixture data.
#[derive(Debug, Clone, Default)]
pub struct MemoryPolicyStore {
    subjects: Vec<SubjectProfile>,
    roles: Vec<RoleDetail>,
    permissions: Vec<(i64, UserPermissions)>,
}

impl MemoryPolicyStore {
    pub fn new() -> MemoryPolicyStore {
        MemoryPolicyStore::default()
    }

    pub fn with_subject(mut self, subject: SubjectProfile) -> MemoryPolicyStore {
        self.subjects.push(subject);
        self
    }

    pub fn with_role(mut self, role: RoleDetail) -> MemoryPolicyStore {
        self.roles.push(role);
        self
    }

    pub fn with_user_permissions(
        mut self,
        subject_id: i64,
        permissions: UserPermissions,
    ) -> MemoryPolicyStore {
        self.permissions.push((subject_id, permissions));
        self
    }

    pub fn from_fixture(fixture: PolicyFixture) -> MemoryPolicyStore {
        let subject_id = fixture.subject.id;
        let mut store = MemoryPolicyStore::new().with_subject(fixture.subject);
        if let Some(role) = fixture.role {
            store = store.with_role(role);
        }
        store.with_user_permissions(subject_id, fixture.permissions)
    }
}

impl PolicyStore for MemoryPolicyStore {
    async fn fetch_subject(&self, subject_id: i64) -> Result<SubjectProfile, StoreError> {
        self.subjects
            .iter()
            .find(|subject| subject.id == subject_id)
            .cloned()
            .ok_or(StoreError::SubjectNotFound(subject_id))
    }

    async fn fetch_role(&self, role_id: i64) -> Result<Option<RoleDetail>, StoreError> {
        Ok(self.roles.iter().find(|role| role.id == role_id).cloned())
    }

    async fn fetch_user_permissions(&self, subject_id: i64) -> Result<UserPermissions, StoreError> {
        Ok(self
            .permissions
            .iter()
            .find(|(id, _)| *id == subject_id)
            .map(|(_, permissions)| permissions.clone())
            .unwrap_or_default())
    }
}
