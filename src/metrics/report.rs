use std::time::Duration;

use serde::Serialize;

use super::cycle::CycleStatistics;
use super::latency::{LatencyTotal, serialize_latency_ms};
use super::types::ResponseCodeHistogram;

/// Run-level aggregate, grown one cycle at a time by the orchestrator.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub total_requests: u64,
    pub success_count: u64,
    pub error_count: u64,
    pub response_code_histogram: ResponseCodeHistogram,
    #[serde(rename = "average_latency_ms", serialize_with = "serialize_latency_ms")]
    pub average_latency: Option<Duration>,
    pub cycle_details: Vec<CycleStatistics>,
    #[serde(skip)]
    success_latency: LatencyTotal,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a completed cycle into the run totals and appends it to
    /// `cycle_details`.
    pub fn record_cycle(&mut self, cycle: CycleStatistics) {
        self.total_requests = self.total_requests.saturating_add(cycle.total_requests);
        self.success_count = self.success_count.saturating_add(cycle.success_count);
        self.error_count = self.error_count.saturating_add(cycle.error_count);
        for (status_code, count) in &cycle.response_code_histogram {
            let bucket = self.response_code_histogram.entry(*status_code).or_insert(0);
            *bucket = bucket.saturating_add(*count);
        }
        self.success_latency.merge(&cycle.success_latency);
        self.cycle_details.push(cycle);
    }

    /// Computes the run-wide mean over every successful probe.
    pub fn finish(&mut self) {
        self.average_latency = self.success_latency.mean();
    }

    #[must_use]
    pub const fn success_latency(&self) -> LatencyTotal {
        self.success_latency
    }
}
