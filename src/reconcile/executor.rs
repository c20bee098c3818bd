//! Applies reconcile decisions against a `RewriteRepository`.

use log::{error, info, warn};

use super::actions::{FailureStage, ReconcileReport, RewriteAction, RewriteFailure};
use super::decide;
use crate::api::RewriteRepository;
use crate::config::FailurePolicy;
use crate::error_handling::{update_error_stats, ApiError, FailureStats};
use crate::models::{Profile, RemoteRewrite, RewriteSpec};

/// Converges every desired rewrite, sequentially and in configuration order.
///
/// Each entry is decided against the live view of the remote list, which is
/// updated after every successful call: deleted entries are dropped and created
/// ones appended. A failed delete skips the create for that entry. Under
/// `FailurePolicy::Abort` processing stops at the first failure; nothing that
/// already succeeded is rolled back.
pub async fn reconcile_rewrites<R>(
    repo: &R,
    profile: &Profile,
    desired: &[RewriteSpec],
    observed: Vec<RemoteRewrite>,
    policy: FailurePolicy,
    stats: &FailureStats,
) -> ReconcileReport
where
    R: RewriteRepository + ?Sized,
{
    let mut view = observed;
    let mut report = ReconcileReport::default();

    for spec in desired {
        let action = decide(spec, &view);
        let result = apply(repo, &profile.id, action, &mut view, &mut report).await;

        if let Err(failure) = result {
            error!("Error converging NextDNS rewrite: {}", failure);
            update_error_stats(stats, &failure.error);
            report.failures.push(failure);
            if policy == FailurePolicy::Abort {
                report.aborted = true;
                break;
            }
        }
    }

    report
}

async fn apply<R>(
    repo: &R,
    profile_id: &str,
    action: RewriteAction,
    view: &mut Vec<RemoteRewrite>,
    report: &mut ReconcileReport,
) -> Result<(), RewriteFailure>
where
    R: RewriteRepository + ?Sized,
{
    let replacing = action.is_replace();
    let spec = match action {
        RewriteAction::Create { spec } => {
            info!("NextDNS rewrite {} does not exist. Creating...", spec.name);
            spec
        }
        RewriteAction::Replace { existing, spec } => {
            info!(
                "NextDNS rewrite {} already exists as {}. Replacing it.",
                spec.name, existing
            );
            delete(repo, profile_id, &existing, &spec, view, report).await?;
            spec
        }
    };

    match repo.create_rewrite(profile_id, &spec).await {
        Ok(created) => {
            info!(
                "NextDNS rewrite {} created with ID: {}.",
                created.name, created.id
            );
            view.push(created.clone());
            report.created.push(created);
            if replacing {
                report.replaced += 1;
            }
            Ok(())
        }
        Err(error) => Err(RewriteFailure {
            spec,
            stage: FailureStage::Create,
            error,
        }),
    }
}

async fn delete<R>(
    repo: &R,
    profile_id: &str,
    existing: &RemoteRewrite,
    spec: &RewriteSpec,
    view: &mut Vec<RemoteRewrite>,
    report: &mut ReconcileReport,
) -> Result<(), RewriteFailure>
where
    R: RewriteRepository + ?Sized,
{
    match repo.delete_rewrite(profile_id, &existing.id).await {
        Ok(()) => {
            info!("NextDNS rewrite {} deleted.", existing.name);
            report.deleted.push(existing.id.clone());
        }
        // Already gone remotely: the delete's goal is met.
        Err(ApiError::NotFound(detail)) => {
            warn!(
                "NextDNS rewrite {} (ID: {}) was already gone: {}",
                existing.name, existing.id, detail
            );
        }
        Err(error) => {
            return Err(RewriteFailure {
                spec: spec.clone(),
                stage: FailureStage::Delete,
                error,
            })
        }
    }
    view.retain(|r| r.id != existing.id);
    Ok(())
}
