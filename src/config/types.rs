use std::time::Duration;

use serde::Deserialize;

use crate::args::OutputFormat;
use crate::args::parsers::parse_duration;
use crate::error::{AppError, AppResult, ConfigError};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    #[serde(alias = "requests_per_cycle")]
    pub concurrency: Option<usize>,
    pub cycles: Option<u64>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub output: Option<String>,
    pub output_format: Option<OutputFormat>,
    pub per_cycle: Option<bool>,
    pub no_progress: Option<bool>,
    pub no_color: Option<bool>,
    pub verbose: Option<bool>,
}

/// Durations in config files may be plain seconds or strings like `"500ms"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self, field: &'static str) -> AppResult<Duration> {
        let parsed = match self {
            DurationValue::Seconds(secs) => parse_duration(&secs.to_string()),
            DurationValue::Text(text) => parse_duration(text),
        };
        parsed.map_err(|err| AppError::config(ConfigError::InvalidDuration { field, source: err }))
    }
}
