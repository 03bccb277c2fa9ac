//! Cycle-based load execution: fan probes out, fan their outcomes back in,
//! and fold each cycle into the run report.
mod cycle;
mod probe;
mod run;


pub use cycle::run_cycle;
pub use probe::Probe;
pub use run::run_load_test;
