//! The grant compiler: wire records ⇄ canonical in-memory sets.
//!
//! Decoding is tolerant by design. Stored grants routinely outlive
//! catalog changes (a page gets renamed, a module is retired), and a
//! stale record must cost exactly that record, never the whole decode.
//! Unknown pages and malformed action names are skipped with a warning.
//!
//! Encoding normalizes: all-false pages and unblocked pairs are omitted,
//! so the stored form never distinguishes "no record" from "record with
//! nothing in it".

use crate::records::{GrantRecord, OverrideRecord};
use opshub_core::{ActionKind, GrantSet, OverrideSet, PageCatalog};
use tracing::warn;

/// Decode stored grant records into a [`GrantSet`] keyed by catalog page
/// key. Records whose `page` does not resolve against the catalog are
/// dropped; duplicate records for one page OR together.
pub fn decode_grants(catalog: &PageCatalog, records: &[GrantRecord]) -> GrantSet {
    let mut grants = GrantSet::new();
    for record in records {
        let Some(entry) = catalog.resolve_api_name(&record.page) else {
            warn!(page = %record.page, "skipping grant for unknown page");
            continue;
        };
        grants.merge(entry.key.clone(), record.actions());
    }
    grants
}

/// Encode a [`GrantSet`] back into wire records. Pages with no allowed
/// action are not emitted; the `page` field carries the catalog
/// `api_name`.
pub fn encode_grants(catalog: &PageCatalog, grants: &GrantSet) -> Vec<GrantRecord> {
    grants
        .iter()
        .filter(|(_, actions)| actions.any())
        .filter_map(|(key, actions)| {
            let Some(entry) = catalog.get(key) else {
                warn!(page = %key, "skipping grant for page missing from catalog");
                return None;
            };
            Some(GrantRecord::new(entry.api_name.clone(), *actions))
        })
        .collect()
}

/// Decode stored override records, keeping only blocked entries. A
/// record with `is_blocked == false` is indistinguishable from absence
/// and is dropped, as are unknown pages and unparseable action names.
pub fn decode_overrides(catalog: &PageCatalog, records: &[OverrideRecord]) -> OverrideSet {
    let mut overrides = OverrideSet::new();
    for record in records {
        if !record.is_blocked {
            continue;
        }
        let Some(entry) = catalog.resolve_api_name(&record.page) else {
            warn!(page = %record.page, "skipping override for unknown page");
            continue;
        };
        let Some(action) = ActionKind::parse(&record.action) else {
            warn!(
                page = %record.page,
                action = %record.action,
                "skipping override with malformed action name"
            );
            continue;
        };
        overrides.block(entry.key.clone(), action);
    }
    overrides
}

/// Encode an [`OverrideSet`] as one record per blocked (page, action)
/// pair. Unblocked pairs are omitted entirely.
pub fn encode_overrides(catalog: &PageCatalog, overrides: &OverrideSet) -> Vec<OverrideRecord> {
    let mut records = Vec::new();
    for (key, blocked) in overrides.iter() {
        let Some(entry) = catalog.get(key) else {
            warn!(page = %key, "skipping override for page missing from catalog");
            continue;
        };
        for action in ActionKind::ALL {
            if blocked.get(action) {
                records.push(OverrideRecord {
                    page: entry.api_name.clone(),
                    action: action.as_str().to_string(),
                    is_blocked: true,
                });
            }
        }
    }
    records
}
