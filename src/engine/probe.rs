use std::sync::Arc;

use async_trait::async_trait;

use crate::metrics::ProbeOutcome;

/// A single request attempt against the target.
///
/// Implementations never fail: transport problems are reported through
/// [`crate::metrics::ProbeResult::Failed`] and the elapsed time is always
/// recorded.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn execute(&self, target_url: Arc<str>, sequence_id: usize) -> ProbeOutcome;
}
