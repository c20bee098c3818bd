//! End-of-run statistics.

use log::{info, warn};
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, FailureStats};
use crate::reconcile::RewriteFailure;

/// Prints failure counts per category to the log.
pub fn print_failure_statistics(stats: &FailureStats) {
    let total = stats.total();
    if total == 0 {
        return;
    }

    info!("Failure Counts ({} total):", total);
    for line in failure_count_lines(stats) {
        info!("{}", line);
    }
}

/// Lists each failed rewrite so the user knows what to fix before the next run.
pub fn print_failed_rewrites(failures: &[RewriteFailure]) {
    for failure in failures {
        warn!("{}", failed_rewrite_line(failure));
    }
}

/// Logs a one-line summary of the run.
pub fn print_simple_summary(
    desired: usize,
    created: usize,
    replaced: usize,
    failed: usize,
    elapsed_seconds: f64,
) {
    info!(
        "{}",
        summary_line(desired, created, replaced, failed, elapsed_seconds)
    );
}

/// One line per category with a non-zero count, in `ErrorType` order.
fn failure_count_lines(stats: &FailureStats) -> Vec<String> {
    ErrorType::iter()
        .filter_map(|error_type| {
            let count = stats.get_count(error_type);
            (count > 0).then(|| format!("   {}: {}", error_type.as_str(), count))
        })
        .collect()
}

fn failed_rewrite_line(failure: &RewriteFailure) -> String {
    format!(
        "   {} ({}) not converged: {} failed: {}",
        failure.spec.name, failure.spec.content, failure.stage, failure.error
    )
}

fn summary_line(
    desired: usize,
    created: usize,
    replaced: usize,
    failed: usize,
    elapsed_seconds: f64,
) -> String {
    format!(
        "Synced {} rewrite{} ({} new, {} replaced, {} failed) in {:.1}s",
        desired,
        if desired == 1 { "" } else { "s" },
        created - replaced,
        replaced,
        failed,
        elapsed_seconds
    )
}
