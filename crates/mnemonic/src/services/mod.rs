//! HTTP adapters for the service ports

mod bible_api;
pub(crate) mod http;
mod openai_completion;
mod openai_images;

pub use bible_api::BibleApiClient;
pub use http::build_client;
pub use openai_completion::{rewrite_instruction, OpenAiCompletionClient, REWRITE_INSTRUCTION};
pub use openai_images::{styled_prompt, OpenAiImageClient, IMAGE_STYLE_SUFFIX};
