mod app;
mod config;
mod engine;
mod http;
mod sink;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use engine::EngineError;
pub use http::HttpError;
pub use sink::SinkError;
pub use validation::ValidationError;
