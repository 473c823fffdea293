//! bible-api.com client
//!
//! `GET {base}/{book}+{chapter}:{verse}?translation={id}` returns a JSON body
//! whose `text` field is the passage.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::VerseApiSettings;
use crate::domain::{LookupError, VerseReference, VerseText};
use crate::ports::VerseLookup;

/// Verse lookup backed by bible-api.com
#[derive(Clone)]
pub struct BibleApiClient {
    client: Client,
    base_url: String,
    translation: String,
}

impl BibleApiClient {
    pub fn new(client: Client, settings: &VerseApiSettings) -> Self {
        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            translation: settings.translation.clone(),
        }
    }

    /// Full request URL for a reference
    pub fn verse_url(&self, reference: &VerseReference) -> String {
        format!(
            "{}/{}?translation={}",
            self.base_url,
            reference.to_path(),
            self.translation
        )
    }
}

#[async_trait]
impl VerseLookup for BibleApiClient {
    async fn fetch(&self, reference: &VerseReference) -> Result<VerseText, LookupError> {
        let url = self.verse_url(reference);
        debug!(url = %url, "Fetching verse");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| LookupError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| LookupError::Transport(err.to_string()))?;

        if !status.is_success() {
            warn!(status = %status, reference = %reference, "Verse lookup rejected");
            return Err(LookupError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_verse(&body)
    }
}

fn parse_verse(body: &str) -> Result<VerseText, LookupError> {
    serde_json::from_str(body).map_err(|err| LookupError::Parse(err.to_string()))
}
