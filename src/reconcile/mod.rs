//! Rewrite reconciliation.
//!
//! `decide` is a pure function from one desired rewrite and the observed
//! remote list to the action that converges it. `reconcile_rewrites` applies
//! those decisions one rewrite at a time against a `RewriteRepository`.
//!
//! Reconciliation is additive: remote rewrites that are not named in the
//! configuration are never touched.

mod actions;
mod executor;
#[cfg(test)]
pub(crate) mod memory;

pub use actions::{FailureStage, ReconcileReport, RewriteAction, RewriteFailure};
pub use executor::reconcile_rewrites;

use crate::models::{RemoteRewrite, RewriteSpec};

/// Decides the action for one desired rewrite.
///
/// Matching is by name only, first match wins. Content is deliberately not
/// compared: an existing entry is always replaced.
pub fn decide(spec: &RewriteSpec, observed: &[RemoteRewrite]) -> RewriteAction {
    match observed.iter().find(|remote| remote.name == spec.name) {
        Some(existing) => RewriteAction::Replace {
            existing: existing.clone(),
            spec: spec.clone(),
        },
        None => RewriteAction::Create { spec: spec.clone() },
    }
}

/// Decides actions for every desired rewrite against a single snapshot.
///
/// The snapshot is not updated between entries, so this is a preview of the
/// run; the executor re-decides each entry against its live view.
pub fn plan(desired: &[RewriteSpec], observed: &[RemoteRewrite]) -> Vec<RewriteAction> {
    desired.iter().map(|spec| decide(spec, observed)).collect()
}
