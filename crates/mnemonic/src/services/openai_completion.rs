//! OpenAI completions client used as the prompt rewriter

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::http::api_error_message;
use crate::config::CompletionSettings;
use crate::domain::{ImagePrompt, RewriteError, VerseText};
use crate::ports::{PromptRewriter, TokenUsage};

/// Instruction the verse text is appended to
pub const REWRITE_INSTRUCTION: &str = "rewrite this text into a description that would allow me to generate an image from it using OpenAI's DALL-E 2 model: ";

/// Build the completion prompt for a verse
pub fn rewrite_instruction(verse: &VerseText) -> String {
    format!("{}{}", REWRITE_INSTRUCTION, verse.text)
}

/// Prompt rewriter backed by `POST /completions`
#[derive(Clone)]
pub struct OpenAiCompletionClient {
    client: Client,
    api_key: String,
    endpoint: String,
    settings: CompletionSettings,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
    #[serde(default)]
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

impl OpenAiCompletionClient {
    pub fn new(client: Client, api_key: impl Into<String>, settings: &CompletionSettings) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            endpoint: format!("{}/completions", settings.base_url.trim_end_matches('/')),
            settings: settings.clone(),
        }
    }

    fn request_for(&self, verse: &VerseText) -> CompletionRequest<'_> {
        CompletionRequest {
            model: &self.settings.model,
            prompt: rewrite_instruction(verse),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }
}

#[async_trait]
impl PromptRewriter for OpenAiCompletionClient {
    async fn rewrite(&self, verse: &VerseText) -> Result<ImagePrompt, RewriteError> {
        let request = self.request_for(verse);
        debug!(model = %request.model, verse_len = %verse.text.len(), "Requesting prompt rewrite");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| RewriteError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| RewriteError::Transport(err.to_string()))?;

        if !status.is_success() {
            let message = api_error_message(&body);
            error!(status = %status, message = %message, "Completion request failed");
            return Err(RewriteError::Status {
                status: status.as_u16(),
                message,
            });
        }

        parse_completion(&body)
    }

    fn model_id(&self) -> &str {
        &self.settings.model
    }
}

fn parse_completion(body: &str) -> Result<ImagePrompt, RewriteError> {
    let response: CompletionResponse =
        serde_json::from_str(body).map_err(|err| RewriteError::Parse(err.to_string()))?;

    if let Some(usage) = &response.usage {
        debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "Completion usage"
        );
    }

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| ImagePrompt::new(choice.text))
        .ok_or(RewriteError::NoChoices)
}
