use reqwest::Client;
use tracing::error;

use crate::args::{DEFAULT_USER_AGENT, VolleyArgs};
use crate::error::{AppError, AppResult, HttpError};

/// Builds the shared client used by every probe of a run.
///
/// Timeouts are only applied when configured; by default a probe waits for
/// the transport to give up on its own.
///
/// # Errors
///
/// Returns an error when the TLS backend or client cannot be initialized.
pub fn build_client(args: &VolleyArgs) -> AppResult<Client> {
    let mut client_builder = Client::builder().user_agent(DEFAULT_USER_AGENT);

    if let Some(timeout) = args.request_timeout {
        client_builder = client_builder.timeout(timeout);
    }
    if let Some(timeout) = args.connect_timeout {
        client_builder = client_builder.connect_timeout(timeout);
    }

    match client_builder.build() {
        Ok(client) => Ok(client),
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            Err(AppError::http(HttpError::BuildClientFailed { source: e }))
        }
    }
}
