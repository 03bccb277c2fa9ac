use std::sync::Arc;

use tracing::{debug, info};

use crate::error::EngineError;
use crate::metrics::{Report, format_latency};

use super::cycle::run_cycle;
use super::probe::Probe;

/// Runs `cycle_count` cycles of `concurrency_width` probes against
/// `target_url`, one cycle after another, and returns the aggregated report.
///
/// `on_cycle_start` is called with the 1-based cycle index right before that
/// cycle's probes are launched. It runs on the caller's path, never while a
/// cycle is in flight.
///
/// Inputs are trusted: validation happens before the engine is invoked.
///
/// # Errors
///
/// Returns an error when any cycle hits a synchronization fault. No partial
/// report is produced in that case.
pub async fn run_load_test<P, F>(
    probe: &Arc<P>,
    target_url: &str,
    concurrency_width: usize,
    cycle_count: u64,
    mut on_cycle_start: F,
) -> Result<Report, EngineError>
where
    P: Probe + ?Sized + 'static,
    F: FnMut(u64),
{
    let target_url: Arc<str> = Arc::from(target_url);
    let mut report = Report::new();

    for cycle_number in 1..=cycle_count {
        on_cycle_start(cycle_number);
        debug!(
            "Starting cycle {}/{} with {} probes.",
            cycle_number, cycle_count, concurrency_width
        );

        let cycle = run_cycle(probe, &target_url, concurrency_width, cycle_number).await?;
        info!(
            cycle = cycle.cycle_number,
            success = cycle.success_count,
            errors = cycle.error_count,
            "Cycle finished (avg latency {}).",
            format_latency(cycle.average_latency)
        );
        report.record_cycle(cycle);
    }

    report.finish();
    Ok(report)
}
