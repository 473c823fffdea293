//! Shared reqwest plumbing

use reqwest::Client;
use tracing::warn;

use crate::config::HttpSettings;
use crate::domain::ConfigError;

/// Build the HTTP client every adapter uses
pub fn build_client(settings: &HttpSettings) -> Result<Client, ConfigError> {
    let mut builder = Client::builder().user_agent(concat!(
        "mnemonic-verses/",
        env!("CARGO_PKG_VERSION")
    ));

    if let Some(timeout) = settings.timeout() {
        builder = builder.timeout(timeout);
    }

    if settings.accept_invalid_certs {
        warn!("TLS certificate verification is disabled");
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder
        .build()
        .map_err(|err| ConfigError::HttpClient(err.to_string()))
}

/// Pull `error.message` out of an OpenAI-style error body, falling back to
/// the raw body.
pub(crate) fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.to_string())
}
