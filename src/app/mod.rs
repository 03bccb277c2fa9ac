//! Local run orchestration: client setup, progress, and report output.
mod export;
mod progress;
mod summary;

use std::sync::Arc;

use tracing::info;
use url::Url;

use crate::args::{OutputFormat, VolleyArgs};
use crate::engine::run_load_test;
use crate::error::AppResult;
use crate::http::{HttpProbe, build_client};
use crate::metrics::{Report, format_latency};

use progress::CycleProgress;

/// Runs the configured cycles against `target_url` and emits the report.
///
/// # Errors
///
/// Returns an error when the client cannot be built, a cycle hits a
/// synchronization fault, or the report cannot be written.
pub(crate) async fn run_local(args: &VolleyArgs, target_url: &Url) -> AppResult<Report> {
    let client = build_client(args)?;
    let probe = Arc::new(HttpProbe::new(client));
    let concurrency = args.concurrency.get();
    let cycles = args.cycles.get();

    info!(
        "Starting {} cycles of {} requests against {}",
        cycles, concurrency, target_url
    );

    let mut progress = CycleProgress::new(cycles, args.no_progress, args.no_color);
    let outcome = run_load_test(&probe, target_url.as_str(), concurrency, cycles, |cycle| {
        progress.on_cycle_start(cycle);
    })
    .await;
    progress.finish();
    let report = outcome?;

    info!(
        "Finished: {} requests, {} ok, {} errors, avg {}",
        report.total_requests,
        report.success_count,
        report.error_count,
        format_latency(report.average_latency)
    );

    if let Some(path) = args.output.as_deref() {
        export::export_json(path, &report).await?;
        info!("Report written to {}", path);
    }

    match args.output_format {
        OutputFormat::Text => summary::print_summary(&report, args.per_cycle),
        OutputFormat::Json => export::print_json(&report)?,
    }

    Ok(report)
}
