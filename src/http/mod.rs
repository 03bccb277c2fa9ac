//! HTTP client construction and the reqwest-backed probe.
mod client;
mod probe;


pub use client::build_client;
pub use probe::HttpProbe;
