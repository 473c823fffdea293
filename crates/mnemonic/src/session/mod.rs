//! Session - the approval loop
//!
//! A session fetches one verse, then alternates between asking the rewriter
//! for a candidate prompt and asking the image service for a picture, with
//! the operator approving each result. The loop is an explicit state machine:
//!
//! ```text
//! Fetching ──rewrite──▶ AwaitingRewriteApproval ──yes/image ok──▶ AwaitingImageApproval ──yes──▶ Done
//!                         ▲   │ no: new candidate                   │ no: new image
//!                         │   │ other: ask again                    │ other: ask again
//!                         └───┴──────────── image error ◀───────────┘
//! ```
//!
//! Rewrite errors end the session; image errors only send the operator back
//! to the rewrite approval prompt. A lookup rejected by the service is
//! replaced by `LOOKUP_FAILED_SENTINEL` and flagged, unless the session was
//! told to abort instead.

mod messages;


use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::domain::{
    Approval, ConfigError, ConsoleError, ImagePrompt, ImageResult, SessionError, VerseReference,
    VerseText, LOOKUP_FAILED_SENTINEL,
};
use crate::ports::{Console, ImageGenerator, PromptRewriter, VerseLookup};
use crate::services::{build_client, BibleApiClient, OpenAiCompletionClient, OpenAiImageClient};

/// What to do when the lookup service rejects a reference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupFailurePolicy {
    /// Carry on with `LOOKUP_FAILED_SENTINEL` as the verse text
    #[default]
    UseSentinel,
    /// End the session with the lookup error
    Abort,
}

/// The three external collaborators
#[derive(Clone)]
pub struct Services {
    pub lookup: Arc<dyn VerseLookup>,
    pub rewriter: Arc<dyn PromptRewriter>,
    pub images: Arc<dyn ImageGenerator>,
}

impl Services {
    pub fn new(
        lookup: Arc<dyn VerseLookup>,
        rewriter: Arc<dyn PromptRewriter>,
        images: Arc<dyn ImageGenerator>,
    ) -> Self {
        Self {
            lookup,
            rewriter,
            images,
        }
    }

    /// Build the HTTP-backed services. Fails without an API key.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let api_key = settings
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let client = build_client(&settings.http)?;

        Ok(Self::new(
            Arc::new(BibleApiClient::new(client.clone(), &settings.verse_api)),
            Arc::new(OpenAiCompletionClient::new(
                client.clone(),
                api_key,
                &settings.completion,
            )),
            Arc::new(OpenAiImageClient::new(client, api_key, &settings.image)),
        ))
    }
}

/// A reference together with the text fetched for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    pub reference: VerseReference,
    pub verse: VerseText,
}

/// Where a session is in the approval loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Verse not fetched yet
    Fetching {
        reference: VerseReference,
    },
    AwaitingRewriteApproval {
        passage: Passage,
        candidate: ImagePrompt,
    },
    AwaitingImageApproval {
        passage: Passage,
        prompt: ImagePrompt,
        image: ImageResult,
    },
    /// Operator accepted an image
    Done {
        passage: Passage,
        prompt: ImagePrompt,
        image: ImageResult,
    },
}

impl SessionState {
    pub fn start(reference: VerseReference) -> Self {
        SessionState::Fetching { reference }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, SessionState::Done { .. })
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Fetching { .. } => write!(f, "fetching"),
            SessionState::AwaitingRewriteApproval { .. } => write!(f, "awaiting_rewrite_approval"),
            SessionState::AwaitingImageApproval { .. } => write!(f, "awaiting_image_approval"),
            SessionState::Done { .. } => write!(f, "done"),
        }
    }
}

/// Outcome of a completed session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub reference: VerseReference,
    pub verse: VerseText,
    pub prompt: ImagePrompt,
    pub image: ImageResult,
    /// Completion requests made
    pub rewrites: u32,
    /// Image requests made, failed ones included
    pub generations: u32,
}

pub struct Session<C: Console> {
    services: Services,
    console: C,
    lookup_failure: LookupFailurePolicy,
    rewrites: u32,
    generations: u32,
}

impl<C: Console> Session<C> {
    pub fn new(services: Services, console: C) -> Self {
        Self {
            services,
            console,
            lookup_failure: LookupFailurePolicy::default(),
            rewrites: 0,
            generations: 0,
        }
    }

    pub fn with_lookup_failure_policy(mut self, policy: LookupFailurePolicy) -> Self {
        self.lookup_failure = policy;
        self
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Ask the operator for whichever parts of the reference are missing
    pub fn complete_reference(
        &mut self,
        book: Option<String>,
        chapter: Option<String>,
        verse: Option<String>,
    ) -> Result<VerseReference, ConsoleError> {
        let book = match book {
            Some(book) => book,
            None => self.console.prompt(messages::BOOK_PROMPT)?,
        };
        let chapter = match chapter {
            Some(chapter) => chapter,
            None => self.console.prompt(messages::CHAPTER_PROMPT)?,
        };
        let verse = match verse {
            Some(verse) => verse,
            None => self.console.prompt(messages::VERSE_PROMPT)?,
        };
        Ok(VerseReference::new(book, chapter, verse))
    }

    /// Run the whole loop for one reference
    pub async fn run(&mut self, reference: VerseReference) -> Result<SessionSummary, SessionError> {
        info!(reference = %reference, "Starting session");

        let mut state = SessionState::start(reference);
        loop {
            state = match state {
                SessionState::Done {
                    passage,
                    prompt,
                    image,
                } => return Ok(self.finish(passage, prompt, image)),
                state => self.step(state).await?,
            };
            debug!(state = %state, "Session transition");
        }
    }

    /// Advance the state machine by one transition
    pub async fn step(&mut self, state: SessionState) -> Result<SessionState, SessionError> {
        match state {
            SessionState::Fetching { reference } => {
                let verse = self.fetch_verse(&reference).await?;
                self.console.say(verse.as_str());
                self.next_candidate(Passage { reference, verse }).await
            }

            SessionState::AwaitingRewriteApproval { passage, candidate } => {
                match self.console.ask_approval(messages::REWRITE_QUESTION)? {
                    Approval::Yes => Ok(self.render(passage, candidate).await),
                    Approval::No => self.next_candidate(passage).await,
                    Approval::Invalid => {
                        self.console.notice(messages::INVALID_INPUT);
                        Ok(SessionState::AwaitingRewriteApproval { passage, candidate })
                    }
                }
            }

            SessionState::AwaitingImageApproval {
                passage,
                prompt,
                image,
            } => match self.console.ask_approval(messages::IMAGE_QUESTION)? {
                Approval::Yes => Ok(SessionState::Done {
                    passage,
                    prompt,
                    image,
                }),
                Approval::No => Ok(self.render(passage, prompt).await),
                Approval::Invalid => {
                    self.console.notice(messages::INVALID_INPUT);
                    Ok(SessionState::AwaitingImageApproval {
                        passage,
                        prompt,
                        image,
                    })
                }
            },

            done @ SessionState::Done { .. } => Ok(done),
        }
    }

    async fn fetch_verse(&mut self, reference: &VerseReference) -> Result<VerseText, SessionError> {
        match self.services.lookup.fetch(reference).await {
            Ok(verse) => Ok(verse),
            Err(err) if err.is_status() && self.lookup_failure == LookupFailurePolicy::UseSentinel => {
                warn!(reference = %reference, error = ?err, "Verse lookup failed, using placeholder text");
                self.console.notice(&messages::sentinel_fallback(reference));
                Ok(VerseText::new(LOOKUP_FAILED_SENTINEL))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn next_candidate(&mut self, passage: Passage) -> Result<SessionState, SessionError> {
        self.rewrites += 1;
        debug!(
            model = %self.services.rewriter.model_id(),
            attempt = self.rewrites,
            "Rewriting verse"
        );

        let candidate = self.services.rewriter.rewrite(&passage.verse).await?;
        self.console.say(&messages::candidate(&candidate));
        Ok(SessionState::AwaitingRewriteApproval { passage, candidate })
    }

    async fn render(&mut self, passage: Passage, prompt: ImagePrompt) -> SessionState {
        self.generations += 1;

        match self.services.images.generate(&prompt).await {
            Ok(image) => {
                info!(url = %image.url, attempt = self.generations, "Image generated");
                self.console.say(&messages::image_link(&image));
                SessionState::AwaitingImageApproval {
                    passage,
                    prompt,
                    image,
                }
            }
            Err(err) => {
                warn!(error = %err, "Image generation failed");
                self.console.notice(messages::IMAGE_FAILED);
                self.console.say(&messages::candidate(&prompt));
                SessionState::AwaitingRewriteApproval {
                    passage,
                    candidate: prompt,
                }
            }
        }
    }

    fn finish(&mut self, passage: Passage, prompt: ImagePrompt, image: ImageResult) -> SessionSummary {
        let Passage { reference, verse } = passage;

        self.console.say("");
        self.console.say(messages::CLOSING);
        self.console.say("");
        self.console.say(&messages::reference_summary(&reference, &verse));

        info!(
            reference = %reference,
            rewrites = self.rewrites,
            generations = self.generations,
            "Session complete"
        );

        SessionSummary {
            reference,
            verse,
            prompt,
            image,
            rewrites: self.rewrites,
            generations: self.generations,
        }
    }
}
