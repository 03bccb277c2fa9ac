//! Probe outcomes and their reduction into cycle and run statistics.
mod cycle;
mod latency;
mod report;
mod types;


pub use cycle::{CycleReducer, CycleStatistics};
pub use latency::{LatencyTotal, format_latency, latency_ms};
pub use report::Report;
pub use types::{ProbeOutcome, ProbeResult, ResponseCodeHistogram};
