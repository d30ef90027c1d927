//! The access check service: the one query surface route guards and UI
//! affordances talk to.
//!
//! Every call re-fetches the subject's grants from the policy store —
//! grants change between requests, and answering from stale data is a
//! worse failure than the extra reads. Any store failure is converted to
//! a denial plus a diagnostic, so callers in a route-guard position can
//! treat "can't decide" and "decided no" identically.

use crate::alias;
use crate::store::{PolicyStore, StoreError};
use opshub_core::{
    ActionKind, EffectiveMatrix, GrantSet, OverrideSet, PageCatalog, RoleRef, Subject, resolve,
};
use opshub_models::{decode_grants, decode_overrides};
use std::sync::Arc;
use tracing::{debug, warn};

/// Errors surfaced by [`AccessService::effective_matrix`]. The boolean
/// query path never returns these; it fails closed instead.
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Point-query and matrix-query access checks over a [`PolicyStore`].
#[derive(Debug, Clone)]
pub struct AccessService<S> {
    store: S,
    catalog: Arc<PageCatalog>,
}

impl<S: PolicyStore> AccessService<S> {
    pub fn new(store: S, catalog: Arc<PageCatalog>) -> AccessService<S> {
        AccessService { store, catalog }
    }

    pub fn catalog(&self) -> &PageCatalog {
        &self.catalog
    }

    /// Can `subject_id` perform `action` on `page_key`?
    ///
    /// An omitted action means page-level reachability, which is `view`.
    /// Unknown page keys deny for everyone, superusers included. Store
    /// failures deny and log; they never propagate.
    pub async fn can_access(
        &self,
        subject_id: i64,
        page_key: &str,
        action: Option<ActionKind>,
    ) -> bool {
        let action = action.unwrap_or(ActionKind::View);

        let matrix = match self.load_matrix(subject_id).await {
            Ok(matrix) => matrix,
            Err(err) => {
                warn!(
                    subject_id,
                    page = page_key,
                    action = %action,
                    error = %err,
                    "policy store unavailable, denying access"
                );
                return false;
            }
        };

        if matrix.allows(page_key, action) {
            return true;
        }

        for (fallback_page, fallback_action) in alias::fallbacks(page_key, action) {
            if matrix.allows(fallback_page, fallback_action) {
                debug!(
                    subject_id,
                    page = page_key,
                    via = fallback_page,
                    action = %fallback_action,
                    "access granted through page alias"
                );
                return true;
            }
        }

        false
    }

    /// The subject's full effective matrix, for "what can this user
    /// actually do" displays. Unlike [`can_access`](Self::can_access)
    /// this propagates store failures, since a read-only display can
    /// render an error where a route guard cannot.
    pub async fn effective_matrix(&self, subject_id: i64) -> Result<EffectiveMatrix, AccessError> {
        Ok(self.load_matrix(subject_id).await?)
    }

    /// Fetch order is fixed: subject, then role, then user permissions.
    /// The role read depends on the profile's `role.id`; a role deleted
    /// in between resolves as "no role", not as an error. Unrestricted
    /// subjects short-circuit before any grant fetch.
    async fn load_matrix(&self, subject_id: i64) -> Result<EffectiveMatrix, StoreError> {
        let profile = self.store.fetch_subject(subject_id).await?;
        let subject = Subject {
            id: profile.id,
            is_superuser: profile.is_superuser,
            role: profile.role.map(|role| RoleRef {
                id: role.id,
                name: role.name,
            }),
        };

        if subject.is_unrestricted() {
            return Ok(resolve(
                &subject,
                &self.catalog,
                &GrantSet::new(),
                &GrantSet::new(),
                &OverrideSet::new(),
            ));
        }

        let role_grants = match &subject.role {
            Some(role) => match self.store.fetch_role(role.id).await? {
                Some(detail) => decode_grants(&self.catalog, &detail.permissions),
                None => {
                    debug!(
                        subject_id,
                        role_id = role.id,
                        "subject's role no longer exists, resolving with direct grants only"
                    );
                    GrantSet::new()
                }
            },
            None => GrantSet::new(),
        };

        let permissions = self.store.fetch_user_permissions(subject_id).await?;
        let direct_grants = decode_grants(&self.catalog, &permissions.direct_permissions);
        let overrides = decode_overrides(&self.catalog, &permissions.permission_overrides);

        Ok(resolve(
            &subject,
            &self.catalog,
            &role_grants,
            &direct_grants,
            &overrides,
        ))
    }
}
