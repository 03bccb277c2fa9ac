use std::time::Duration;

use serde::Serialize;

use crate::error::EngineError;

use super::latency::{LatencyTotal, serialize_latency_ms};
use super::types::{ProbeOutcome, ProbeResult, ResponseCodeHistogram};

/// Reduction of every probe outcome collected in one cycle.
#[derive(Debug, Clone, Serialize)]
pub struct CycleStatistics {
    pub cycle_number: u64,
    pub total_requests: u64,
    pub success_count: u64,
    pub error_count: u64,
    pub response_code_histogram: ResponseCodeHistogram,
    #[serde(rename = "average_latency_ms", serialize_with = "serialize_latency_ms")]
    pub average_latency: Option<Duration>,
    #[serde(skip)]
    pub success_latency: LatencyTotal,
}

/// Folds outcomes into a [`CycleStatistics`], attributing exactly one
/// outcome to each sequence id of the cycle.
#[derive(Debug)]
pub struct CycleReducer {
    cycle_number: u64,
    expected: usize,
    seen: Vec<bool>,
    total_requests: u64,
    success_count: u64,
    error_count: u64,
    response_code_histogram: ResponseCodeHistogram,
    success_latency: LatencyTotal,
}

impl CycleReducer {
    #[must_use]
    pub fn new(cycle_number: u64, expected: usize) -> Self {
        Self {
            cycle_number,
            expected,
            seen: vec![false; expected],
            total_requests: 0,
            success_count: 0,
            error_count: 0,
            response_code_histogram: ResponseCodeHistogram::new(),
            success_latency: LatencyTotal::default(),
        }
    }

    /// Records one outcome.
    ///
    /// # Errors
    ///
    /// Returns an error when the outcome's sequence id is outside the cycle
    /// or was already recorded.
    pub fn record(&mut self, outcome: &ProbeOutcome) -> Result<(), EngineError> {
        let sequence_id = outcome.sequence_id;
        let slot = self
            .seen
            .get_mut(sequence_id)
            .ok_or(EngineError::UnknownOutcome {
                cycle_number: self.cycle_number,
                sequence_id,
            })?;
        if *slot {
            return Err(EngineError::DuplicateOutcome {
                cycle_number: self.cycle_number,
                sequence_id,
            });
        }
        *slot = true;

        self.total_requests = self.total_requests.saturating_add(1);
        match &outcome.result {
            ProbeResult::Completed { status_code } => {
                self.success_count = self.success_count.saturating_add(1);
                let bucket = self.response_code_histogram.entry(*status_code).or_insert(0);
                *bucket = bucket.saturating_add(1);
                self.success_latency.record(outcome.latency);
            }
            ProbeResult::Failed { .. } => {
                self.error_count = self.error_count.saturating_add(1);
            }
        }
        Ok(())
    }

    /// Closes the reduction.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly one outcome was recorded per probe.
    pub fn finish(self) -> Result<CycleStatistics, EngineError> {
        let collected = usize::try_from(self.total_requests).unwrap_or(usize::MAX);
        if collected != self.expected {
            return Err(EngineError::OutcomeCountMismatch {
                cycle_number: self.cycle_number,
                expected: self.expected,
                collected,
            });
        }

        Ok(CycleStatistics {
            cycle_number: self.cycle_number,
            total_requests: self.total_requests,
            success_count: self.success_count,
            error_count: self.error_count,
            response_code_histogram: self.response_code_histogram,
            average_latency: self.success_latency.mean(),
            success_latency: self.success_latency,
        })
    }
}
