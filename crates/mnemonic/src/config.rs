//! Settings for the external services
//!
//! One section per collaborator. `Default` gives the values the pipeline was
//! built around (bible-api.com KJV, text-davinci-002, image-alpha-001).

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BIBLE_API_BASE_URL: &str = "https://bible-api.com";
pub const DEFAULT_TRANSLATION: &str = "kjv";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_COMPLETION_MODEL: &str = "text-davinci-002";
pub const DEFAULT_COMPLETION_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_COMPLETION_TEMPERATURE: f32 = 0.901;
pub const DEFAULT_IMAGE_ENDPOINT: &str = "https://api.openai.com/v1/images/generations";
pub const DEFAULT_IMAGE_MODEL: &str = "image-alpha-001";
pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Verse lookup service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseApiSettings {
    pub base_url: String,
    pub translation: String,
}

impl Default for VerseApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BIBLE_API_BASE_URL.to_string(),
            translation: DEFAULT_TRANSLATION.to_string(),
        }
    }
}

/// Completion service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionSettings {
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_COMPLETION_MODEL.to_string(),
            max_tokens: DEFAULT_COMPLETION_MAX_TOKENS,
            temperature: DEFAULT_COMPLETION_TEMPERATURE,
        }
    }
}

/// Image service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSettings {
    pub endpoint: String,
    pub model: String,
    pub size: String,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_IMAGE_ENDPOINT.to_string(),
            model: DEFAULT_IMAGE_MODEL.to_string(),
            size: DEFAULT_IMAGE_SIZE.to_string(),
        }
    }
}

/// Transport settings shared by every client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Per-request timeout in seconds; `0` waits forever
    pub request_timeout_secs: u64,
    /// Skip TLS certificate verification
    pub accept_invalid_certs: bool,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            accept_invalid_certs: false,
        }
    }
}

impl HttpSettings {
    pub fn timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

/// Everything needed to build the three service clients
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// OpenAI API key (completion and image services)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub verse_api: VerseApiSettings,
    pub completion: CompletionSettings,
    pub image: ImageSettings,
    pub http: HttpSettings,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the Bible translation (e.g. "kjv", "web")
    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.verse_api.translation = translation.into();
        self
    }

    /// Set the request timeout; `0` disables it
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.http.request_timeout_secs = secs;
        self
    }

    /// Disable TLS certificate verification
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.http.accept_invalid_certs = accept;
        self
    }
}
