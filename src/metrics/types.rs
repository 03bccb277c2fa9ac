use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

/// Status code to occurrence count, ordered by code.
pub type ResponseCodeHistogram = BTreeMap<u16, u64>;

/// How a single request attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    /// The HTTP exchange completed, whatever the status class.
    Completed { status_code: u16 },
    /// The transport gave up before a response arrived.
    Failed { error: String },
}

/// Result of one probe, handed from the probe task to the cycle collector.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub sequence_id: usize,
    pub target_url: Arc<str>,
    pub result: ProbeResult,
    pub latency: Duration,
}

impl ProbeOutcome {
    #[must_use]
    pub const fn new(
        sequence_id: usize,
        target_url: Arc<str>,
        result: ProbeResult,
        latency: Duration,
    ) -> Self {
        Self {
            sequence_id,
            target_url,
            result,
            latency,
        }
    }

    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self.result, ProbeResult::Completed { .. })
    }

    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self.result {
            ProbeResult::Completed { status_code } => Some(status_code),
            ProbeResult::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn error_description(&self) -> Option<&str> {
        match &self.result {
            ProbeResult::Completed { .. } => None,
            ProbeResult::Failed { error } => Some(error.as_str()),
        }
    }
}
