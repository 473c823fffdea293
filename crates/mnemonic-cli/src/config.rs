//! Configuration management for Mnemonic CLI
//!
//! Stores the API key and service overrides in ~/.config/mnemonic-verses/config.toml

use anyhow::{Context, Result};
use mnemonic::config::{
    DEFAULT_BIBLE_API_BASE_URL, DEFAULT_COMPLETION_MAX_TOKENS, DEFAULT_COMPLETION_MODEL,
    DEFAULT_COMPLETION_TEMPERATURE, DEFAULT_IMAGE_ENDPOINT, DEFAULT_IMAGE_MODEL,
    DEFAULT_IMAGE_SIZE, DEFAULT_OPENAI_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TRANSLATION,
};
use mnemonic::{
    CompletionSettings, HttpSettings, ImageSettings, LookupFailurePolicy, Settings,
    VerseApiSettings,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "mnemonic-verses";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub bible_api_base_url: String,
    pub translation: String,
    pub openai_base_url: String,
    pub completion_model: String,
    pub completion_max_tokens: u32,
    pub completion_temperature: f32,
    pub image_endpoint: String,
    pub image_model: String,
    pub image_size: String,
    /// 0 disables the timeout
    pub request_timeout_secs: u64,
    pub accept_invalid_certs: bool,
    /// Keep going with placeholder text when a verse can't be found;
    /// `false` ends the run instead
    pub use_sentinel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            bible_api_base_url: DEFAULT_BIBLE_API_BASE_URL.to_string(),
            translation: DEFAULT_TRANSLATION.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            completion_model: DEFAULT_COMPLETION_MODEL.to_string(),
            completion_max_tokens: DEFAULT_COMPLETION_MAX_TOKENS,
            completion_temperature: DEFAULT_COMPLETION_TEMPERATURE,
            image_endpoint: DEFAULT_IMAGE_ENDPOINT.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            accept_invalid_certs: false,
            use_sentinel: true,
        }
    }
}

/// Per-run values from flags or the environment; `Some` wins over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub translation: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub abort_on_lookup_failure: bool,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Set API key
    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key);
    }

    /// Resolve the library settings for one run
    pub fn to_settings(&self, overrides: &Overrides) -> Settings {
        Settings {
            api_key: overrides.api_key.clone().or_else(|| self.api_key.clone()),
            verse_api: VerseApiSettings {
                base_url: self.bible_api_base_url.clone(),
                translation: overrides
                    .translation
                    .clone()
                    .unwrap_or_else(|| self.translation.clone()),
            },
            completion: CompletionSettings {
                base_url: self.openai_base_url.clone(),
                model: self.completion_model.clone(),
                max_tokens: self.completion_max_tokens,
                temperature: self.completion_temperature,
            },
            image: ImageSettings {
                endpoint: self.image_endpoint.clone(),
                model: self.image_model.clone(),
                size: self.image_size.clone(),
            },
            http: HttpSettings {
                request_timeout_secs: overrides
                    .request_timeout_secs
                    .unwrap_or(self.request_timeout_secs),
                accept_invalid_certs: self.accept_invalid_certs,
            },
        }
    }

    pub fn lookup_failure_policy(&self, overrides: &Overrides) -> LookupFailurePolicy {
        if overrides.abort_on_lookup_failure || !self.use_sentinel {
            LookupFailurePolicy::Abort
        } else {
            LookupFailurePolicy::UseSentinel
        }
    }
}
