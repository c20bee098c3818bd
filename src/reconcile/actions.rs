//! Actions derived by the reconciler.

use std::fmt;

use crate::error_handling::ApiError;
use crate::models::{RemoteRewrite, RewriteSpec};

/// What has to happen remotely for one desired rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteAction {
    /// No remote rewrite with this name exists yet.
    #[allow(missing_docs)]
    Create { spec: RewriteSpec },

    /// A remote rewrite with this name exists. It is deleted and recreated,
    /// even when its content already matches.
    #[allow(missing_docs)]
    Replace {
        existing: RemoteRewrite,
        spec: RewriteSpec,
    },
}

impl RewriteAction {
    /// The desired rewrite this action converges.
    pub fn spec(&self) -> &RewriteSpec {
        match self {
            RewriteAction::Create { spec } | RewriteAction::Replace { spec, .. } => spec,
        }
    }

    /// True for actions that delete an existing entry first.
    pub fn is_replace(&self) -> bool {
        matches!(self, RewriteAction::Replace { .. })
    }
}

/// The remote call that failed for a rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// Deleting the existing entry
    Delete,
    /// Creating the desired entry
    Create,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureStage::Delete => f.write_str("delete"),
            FailureStage::Create => f.write_str("create"),
        }
    }
}

/// A desired rewrite that could not be converged.
#[derive(Debug)]
pub struct RewriteFailure {
    /// The rewrite that did not converge
    pub spec: RewriteSpec,
    /// Which call failed
    pub stage: FailureStage,
    /// Error returned by the API client
    pub error: ApiError,
}

impl fmt::Display for RewriteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed for {}: {}",
            self.stage, self.spec.name, self.error
        )
    }
}

/// Outcome of applying actions for every desired rewrite.
#[derive(Debug, Default)]
pub struct ReconcileReport {
    /// Rewrites created during the run, with their new ids
    pub created: Vec<RemoteRewrite>,
    /// Ids of remote rewrites deleted during the run
    pub deleted: Vec<String>,
    /// Desired rewrites that replaced an existing entry successfully
    pub replaced: usize,
    /// Desired rewrites that failed
    pub failures: Vec<RewriteFailure>,
    /// True if processing stopped early under the abort policy
    pub aborted: bool,
}
