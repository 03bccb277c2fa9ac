use std::time::Duration;

use serde::Serializer;

/// Running sum of successful latencies, kept alongside the sample count so
/// means can be merged across cycles without averaging averages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatencyTotal {
    sum: Duration,
    count: u64,
}

impl LatencyTotal {
    pub fn record(&mut self, latency: Duration) {
        self.sum = self.sum.saturating_add(latency);
        self.count = self.count.saturating_add(1);
    }

    pub fn merge(&mut self, other: &Self) {
        self.sum = self.sum.saturating_add(other.sum);
        self.count = self.count.saturating_add(other.count);
    }

    #[must_use]
    pub const fn sum(&self) -> Duration {
        self.sum
    }

    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Mean latency, or `None` when nothing was recorded.
    #[must_use]
    pub fn mean(&self) -> Option<Duration> {
        if self.count == 0 {
            return None;
        }
        let nanos = self.sum.as_nanos().checked_div(u128::from(self.count))?;
        Some(Duration::from_nanos(
            u64::try_from(nanos).map_or(u64::MAX, |value| value),
        ))
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "Reports expose latencies as fractional milliseconds."
)]
#[must_use]
pub fn latency_ms(latency: Duration) -> f64 {
    latency.as_secs_f64() * 1_000.0
}

/// Formats a latency as milliseconds with microsecond precision, e.g. `12.345ms`.
#[must_use]
pub fn format_latency(latency: Option<Duration>) -> String {
    latency.map_or_else(
        || "n/a".to_owned(),
        |value| {
            let micros = value.as_micros();
            format!("{}.{:03}ms", micros / 1000, micros % 1000)
        },
    )
}

pub(super) fn serialize_latency_ms<S>(
    value: &Option<Duration>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(latency) => serializer.serialize_some(&latency_ms(*latency)),
        None => serializer.serialize_none(),
    }
}
