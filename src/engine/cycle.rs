use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::error::EngineError;
use crate::metrics::{CycleReducer, CycleStatistics, ProbeOutcome};

use super::probe::Probe;

/// Runs one cycle: launches `concurrency_width` probes at once, waits for
/// all of them, and reduces their outcomes.
///
/// A width of zero launches nothing and yields empty statistics.
///
/// # Errors
///
/// Returns an error when a probe task panics or is cancelled, or when the
/// collected outcomes do not map one-to-one onto the launched probes.
pub async fn run_cycle<P>(
    probe: &Arc<P>,
    target_url: &Arc<str>,
    concurrency_width: usize,
    cycle_number: u64,
) -> Result<CycleStatistics, EngineError>
where
    P: Probe + ?Sized + 'static,
{
    let mut reducer = CycleReducer::new(cycle_number, concurrency_width);
    if concurrency_width == 0 {
        return reducer.finish();
    }

    // Room for every outcome of the cycle, so probes never wait on the collector.
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<ProbeOutcome>(concurrency_width);
    let mut handles = Vec::with_capacity(concurrency_width);

    for sequence_id in 0..concurrency_width {
        let probe = Arc::clone(probe);
        let target_url = Arc::clone(target_url);
        let outcome_tx = outcome_tx.clone();
        handles.push(tokio::spawn(async move {
            let outcome = probe.execute(target_url, sequence_id).await;
            if outcome_tx.send(outcome).await.is_err() {
                debug!(
                    "Collector for probe {} went away before its outcome arrived.",
                    sequence_id
                );
            }
        }));
    }
    drop(outcome_tx);

    let mut join_failure = None;
    for (sequence_id, handle) in handles.into_iter().enumerate() {
        if let Err(source) = handle.await
            && join_failure.is_none()
        {
            join_failure = Some(EngineError::ProbeTaskFailed {
                cycle_number,
                sequence_id,
                source,
            });
        }
    }
    if let Some(err) = join_failure {
        return Err(err);
    }

    // Every sender is gone once the barrier passes; recv drains what is
    // buffered and then reports the closed channel.
    while let Some(outcome) = outcome_rx.recv().await {
        reducer.record(&outcome)?;
    }
    outcome_rx.close();

    reducer.finish()
}
