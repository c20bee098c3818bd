//! Sync orchestration.
//!
//! Loader -> profile resolution -> rewrite listing -> reconciliation, in that
//! order. Every step before reconciliation is fatal on failure.

use std::time::Instant;

use log::{info, warn};

use crate::api::{NextDnsClient, ProfileResolver, RewriteRepository};
use crate::app::{print_failed_rewrites, print_failure_statistics, print_simple_summary};
use crate::config::{
    Config, FailOn, FailurePolicy, RewriteConfig, EXIT_FATAL, EXIT_PARTIAL_FAILURE, EXIT_SUCCESS,
};
use crate::error_handling::{FailureStats, SyncError};
use crate::initialization::init_client;
use crate::models::Profile;
use crate::reconcile::{plan, reconcile_rewrites, RewriteFailure};

/// Results of a sync run.
#[derive(Debug)]
pub struct SyncReport {
    /// Profile the rewrites were applied to
    pub profile: Profile,
    /// Number of rewrites declared in the configuration
    pub desired: usize,
    /// Rewrites created (including the create half of replacements)
    pub created: usize,
    /// Rewrites that replaced an existing entry
    pub replaced: usize,
    /// Rewrites that failed to converge
    pub failed: usize,
    /// Details of each failure
    pub failures: Vec<RewriteFailure>,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs a full sync with the provided configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration document is missing or invalid
/// - No API key was supplied
/// - The profile cannot be listed or does not exist
/// - The existing rewrites cannot be listed
/// - A rewrite fails while `on_error` is `abort`
///
/// Per-rewrite failures under the `continue` policy are not errors; they are
/// reported in [`SyncReport::failures`].
///
/// # Example
///
/// ```no_run
/// use nextdns_rewrites::{run_sync, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     config_path: PathBuf::from("rewrites.yaml"),
///     api_key: std::env::var("NEXTDNS_API_KEY").ok(),
///     ..Default::default()
/// };
/// let report = run_sync(config).await?;
/// println!("{} rewrites created", report.created);
/// # Ok(())
/// # }
/// ```
pub async fn run_sync(config: Config) -> Result<SyncReport, SyncError> {
    let rewrite_config = RewriteConfig::load(&config.config_path)?;

    let api_key = config
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or(SyncError::MissingApiKey)?;

    let http = init_client(&config, api_key)?;
    let client = NextDnsClient::new(http, config.api_url.as_str());

    sync_profile(&client, &client, &rewrite_config, config.on_error).await
}

/// Resolves the profile and reconciles its rewrites against `rewrite_config`.
pub async fn sync_profile<P, R>(
    resolver: &P,
    repo: &R,
    rewrite_config: &RewriteConfig,
    policy: FailurePolicy,
) -> Result<SyncReport, SyncError>
where
    P: ProfileResolver + ?Sized,
    R: RewriteRepository + ?Sized,
{
    let start_time = Instant::now();
    let profile_name = &rewrite_config.profile_name;
    info!("NextDNS Profile Name: {}", profile_name);

    let profile = resolver
        .resolve_profile(profile_name)
        .await
        .map_err(SyncError::ProfileLookup)?
        .ok_or_else(|| SyncError::ProfileNotFound(profile_name.clone()))?;
    info!(
        "NextDNS profile found with name: {} and ID: {}.",
        profile.name, profile.id
    );

    let observed = repo
        .list_rewrites(&profile.id)
        .await
        .map_err(SyncError::ListRewrites)?;
    info!(
        "Profile {} has {} existing rewrite(s)",
        profile.id,
        observed.len()
    );

    let desired = &rewrite_config.rewrites;
    if desired.is_empty() {
        warn!("No NextDNS rewrites found in configuration file; nothing to do.");
    } else {
        let actions = plan(desired, &observed);
        let replacements = actions.iter().filter(|a| a.is_replace()).count();
        info!(
            "{} rewrite(s) to create, {} to replace",
            actions.len() - replacements,
            replacements
        );
    }

    let stats = FailureStats::new();
    let outcome = reconcile_rewrites(repo, &profile, desired, observed, policy, &stats).await;

    print_failure_statistics(&stats);
    print_failed_rewrites(&outcome.failures);

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    print_simple_summary(
        desired.len(),
        outcome.created.len(),
        outcome.replaced,
        outcome.failures.len(),
        elapsed_seconds,
    );

    let aborted = outcome.aborted;
    let report = SyncReport {
        profile,
        desired: desired.len(),
        created: outcome.created.len(),
        replaced: outcome.replaced,
        failed: outcome.failures.len(),
        failures: outcome.failures,
        elapsed_seconds,
    };

    if aborted {
        let (name, detail) = report
            .failures
            .last()
            .map(|f| (f.spec.name.clone(), format!("{} {}", f.stage, f.error)))
            .unwrap_or_default();
        return Err(SyncError::Aborted {
            name,
            detail,
            report: Box::new(report),
        });
    }

    Ok(report)
}

/// Maps the outcome of a run to the process exit code.
///
/// - `0`: the run completed and `fail_on` tolerates its failures
/// - `1`: a fatal error stopped the run before reconciliation
/// - `2`: rewrites failed under `FailOn::AnyFailure`, or the run was aborted
///
/// An aborted run exits `2` regardless of `fail_on`.
pub fn exit_code(fail_on: FailOn, outcome: &Result<SyncReport, SyncError>) -> i32 {
    match outcome {
        Ok(report) => match fail_on {
            FailOn::AnyFailure if report.failed > 0 => EXIT_PARTIAL_FAILURE,
            FailOn::AnyFailure | FailOn::Never => EXIT_SUCCESS,
        },
        Err(SyncError::Aborted { .. }) => EXIT_PARTIAL_FAILURE,
        Err(_) => EXIT_FATAL,
    }
}
