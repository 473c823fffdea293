//! OpenAI image generation client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::http::api_error_message;
use crate::config::ImageSettings;
use crate::domain::{ImageError, ImagePrompt, ImageResult};
use crate::ports::ImageGenerator;

pub const IMAGE_STYLE_SUFFIX: &str = "in a Hyperrealistic/impressionistic/conceptual art style";

/// Prompt actually sent to the image model
pub fn styled_prompt(prompt: &ImagePrompt) -> String {
    format!("generate an image of {} {}", prompt.as_str(), IMAGE_STYLE_SUFFIX)
}

/// Image generator backed by `POST /images/generations`
#[derive(Clone)]
pub struct OpenAiImageClient {
    client: Client,
    api_key: String,
    settings: ImageSettings,
}

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: String,
    num_images: u32,
    size: &'a str,
    response_format: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}

impl OpenAiImageClient {
    pub fn new(client: Client, api_key: impl Into<String>, settings: &ImageSettings) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            settings: settings.clone(),
        }
    }

    fn request_for(&self, prompt: &ImagePrompt) -> ImageRequest<'_> {
        ImageRequest {
            model: &self.settings.model,
            prompt: styled_prompt(prompt),
            num_images: 1,
            size: &self.settings.size,
            response_format: "url",
        }
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageClient {
    async fn generate(&self, prompt: &ImagePrompt) -> Result<ImageResult, ImageError> {
        let request = self.request_for(prompt);
        debug!(model = %request.model, size = %request.size, "Requesting image");

        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| ImageError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ImageError::Transport(err.to_string()))?;

        if !status.is_success() {
            let message = api_error_message(&body);
            error!(status = %status, message = %message, "Image request failed");
            return Err(ImageError::Status {
                status: status.as_u16(),
                message,
            });
        }

        parse_image(&body)
    }
}

fn parse_image(body: &str) -> Result<ImageResult, ImageError> {
    let response: ImageResponse =
        serde_json::from_str(body).map_err(|err| ImageError::Parse(err.to_string()))?;

    response
        .data
        .into_iter()
        .next()
        .and_then(|image| image.url)
        .map(ImageResult::new)
        .ok_or(ImageError::NoImage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_prompt() {
        let prompt = ImagePrompt::new("a dove over still water");
        assert_eq!(
            styled_prompt(&prompt),
            "generate an image of a dove over still water in a Hyperrealistic/impressionistic/conceptual art style"
        );
    }

    #[test]
    fn test_request_body() {
        let client = OpenAiImageClient::new(Client::new(), "sk-test", &ImageSettings::default());
        let request = client.request_for(&ImagePrompt::new("a dove"));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "image-alpha-001");
        assert_eq!(json["num_images"], 1);
        assert_eq!(json["size"], "1024x1024");
        assert_eq!(json["response_format"], "url");
        assert!(json["prompt"].as_str().unwrap().starts_with("generate an image of a dove"));
    }

    #[test]
    fn test_parse_first_url() {
        let body = r#"{"created": 1, "data": [{"url": "https://img.example/1.png"}, {"url": "https://img.example/2.png"}]}"#;
        assert_eq!(parse_image(body).unwrap().url, "https://img.example/1.png");
    }

    #[test]
    fn test_parse_no_data() {
        assert!(matches!(parse_image(r#"{"data": []}"#), Err(ImageError::NoImage)));
        assert!(matches!(
            parse_image(r#"{"data": [{"b64_json": "AAAA"}]}"#),
            Err(ImageError::NoImage)
        ));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(parse_image("not json"), Err(ImageError::Parse(_))));
    }

    // ============================================
    // Over HTTP
    // ============================================

    use crate::services::http::test_server::{refused_url, respond_once};

    fn client_at(base_url: &str) -> OpenAiImageClient {
        let settings = ImageSettings {
            endpoint: format!("{}/v1/images/generations", base_url),
            ..ImageSettings::default()
        };
        OpenAiImageClient::new(Client::new(), "sk-test", &settings)
    }

    #[tokio::test]
    async fn test_generate_posts_payload_and_returns_url() {
        let (base_url, server) =
            respond_once(200, r#"{"created":1,"data":[{"url":"https://img.example/dove.png"}]}"#)
                .await;

        let image = client_at(&base_url)
            .generate(&ImagePrompt::new("a dove"))
            .await
            .unwrap();

        assert_eq!(image.url, "https://img.example/dove.png");

        let request = server.await.unwrap();
        assert_eq!(request.request_line, "POST /v1/images/generations HTTP/1.1");
        assert_eq!(request.header("authorization"), Some("Bearer sk-test"));
        assert!(request
            .header("content-type")
            .is_some_and(|value| value.starts_with("application/json")));

        let body = request.json();
        assert_eq!(body["model"], "image-alpha-001");
        assert_eq!(body["num_images"], 1);
        assert_eq!(body["size"], "1024x1024");
        assert_eq!(body["response_format"], "url");
        assert_eq!(
            body["prompt"],
            "generate an image of a dove in a Hyperrealistic/impressionistic/conceptual art style"
        );
    }

    #[tokio::test]
    async fn test_generate_server_error_is_status() {
        let (base_url, server) = respond_once(
            500,
            r#"{"error":{"message":"The server had an error while processing your request."}}"#,
        )
        .await;

        let err = client_at(&base_url)
            .generate(&ImagePrompt::new("a dove"))
            .await
            .unwrap_err();

        match err {
            ImageError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(
                    message,
                    "The server had an error while processing your request."
                );
            }
            other => panic!("expected status error, got {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_generate_connection_refused_is_transport() {
        let err = client_at(&refused_url().await)
            .generate(&ImagePrompt::new("a dove"))
            .await
            .unwrap_err();

        assert!(matches!(err, ImageError::Transport(_)));
    }
}
