//! Core library for the `volley` CLI.
//!
//! `volley` fires fixed-width bursts of concurrent GET requests at a single
//! target, one cycle after another, and reduces every probe into per-cycle
//! and run-wide statistics. This crate exposes the building blocks used by
//! the binary: CLI argument types, configuration parsing, the cycle engine,
//! the reqwest-backed probe, and the report types. The primary user-facing
//! interface is the `volley` command-line application; library APIs may
//! evolve as the CLI grows.
pub mod args;
pub mod config;
pub mod engine;
pub mod error;
pub mod http;
pub mod metrics;
