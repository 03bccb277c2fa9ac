use thiserror::Error;

/// Structural failures of a cycle. Probe-level transport failures never
/// surface here; they are recorded in the probe outcome instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Probe task {sequence_id} in cycle {cycle_number} did not complete: {source}")]
    ProbeTaskFailed {
        cycle_number: u64,
        sequence_id: usize,
        #[source]
        source: tokio::task::JoinError,
    },
    #[error("Cycle {cycle_number} collected {collected} outcomes, expected {expected}.")]
    OutcomeCountMismatch {
        cycle_number: u64,
        expected: usize,
        collected: usize,
    },
    #[error("Cycle {cycle_number} received a second outcome for probe {sequence_id}.")]
    DuplicateOutcome {
        cycle_number: u64,
        sequence_id: usize,
    },
    #[error("Cycle {cycle_number} received an outcome for unknown probe {sequence_id}.")]
    UnknownOutcome {
        cycle_number: u64,
        sequence_id: usize,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
