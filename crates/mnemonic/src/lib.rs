//! Mnemonic Verses Library
//!
//! Turns a Bible verse into a generated image: the verse is looked up,
//! rewritten into an image prompt by a completion model, then rendered by an
//! image model, with the operator approving each step.
//!
//! # Architecture
//!
//! Same layering as a hexagonal service:
//!
//! - **Domain** (`domain/`): verse/prompt/image values and error types
//! - **Ports** (`ports/`): traits for each external service and the console
//! - **Services** (`services/`): reqwest-backed adapters for the ports
//! - **Session** (`session/`): the approval state machine driving it all
//!
//! # Usage
//!
//! ```rust,ignore
//! use mnemonic::{Session, Settings, Services, VerseReference};
//!
//! let services = Services::from_settings(&settings)?;
//! let mut session = Session::new(services, console);
//! let summary = session.run(VerseReference::new("Matthew", "5", "9")).await?;
//! ```

pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod session;

// Re-export commonly used types
pub use config::{CompletionSettings, HttpSettings, ImageSettings, Settings, VerseApiSettings};
pub use domain::{
    Approval, ConfigError, ConsoleError, ImageError, ImagePrompt, ImageResult, LookupError,
    RewriteError, SessionError, VerseReference, VerseText, LOOKUP_FAILED_SENTINEL,
};
pub use ports::{Console, ImageGenerator, PromptRewriter, VerseLookup};
pub use services::{BibleApiClient, OpenAiCompletionClient, OpenAiImageClient};
pub use session::{LookupFailurePolicy, Passage, Services, Session, SessionState, SessionSummary};
