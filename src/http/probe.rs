use std::error::Error as StdError;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, Response};
use tokio::time::Instant;
use tracing::debug;

use crate::engine::Probe;
use crate::metrics::{ProbeOutcome, ProbeResult};

/// Issues one GET per probe through a shared [`Client`].
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn execute(&self, target_url: Arc<str>, sequence_id: usize) -> ProbeOutcome {
        let started = Instant::now();
        let sent = self.client.get(target_url.as_ref()).send().await;
        // Latency covers the exchange up to the response head.
        let latency = started.elapsed();

        let result = match sent {
            Ok(response) => {
                let status_code = response.status().as_u16();
                if let Err(err) = drain_response_body(response).await {
                    debug!(
                        "Probe {} failed to drain response body: {}",
                        sequence_id,
                        describe_error(&err)
                    );
                }
                ProbeResult::Completed { status_code }
            }
            Err(err) => {
                let error = describe_error(&err);
                debug!("Probe {} failed: {}", sequence_id, error);
                ProbeResult::Failed { error }
            }
        };

        ProbeOutcome::new(sequence_id, target_url, result, latency)
    }
}

async fn drain_response_body(response: Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}

/// Flattens an error and its sources into one line, outermost first.
pub(super) fn describe_error(err: &(dyn StdError + 'static)) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}
