//! Lesson-generation client and shared data model.
//!
//! One request cycle is a single `POST {topic, learnMode}` to the generation
//! server, answered by `{cards: [{front, back}, ...]}`. There is no streaming
//! and no retry: the caller decides how to surface failures.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;

/// Standard User-Agent header for Cardemy API requests.
pub const USER_AGENT: &str = concat!("cardemy/", env!("CARGO_PKG_VERSION"));

/// A single flashcard. Immutable once received from the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

/// Requested deck depth: a quick revision pass or a first-time deep dive.
///
/// The distinction is a server-side prompting concern; the client only
/// forwards the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LearnMode {
    /// Quick, high-level refresher (5-10 cards).
    #[default]
    Revision,
    /// Thorough first-time coverage (15-30 cards).
    Learning,
}

impl LearnMode {
    /// The other mode (used by the TUI mode toggle).
    pub fn toggled(self) -> Self {
        match self {
            LearnMode::Revision => LearnMode::Learning,
            LearnMode::Learning => LearnMode::Revision,
        }
    }

    /// Short display name for the status line.
    pub fn display_name(self) -> &'static str {
        match self {
            LearnMode::Revision => "revision",
            LearnMode::Learning => "learning",
        }
    }
}

impl fmt::Display for LearnMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for LearnMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "revision" => Ok(LearnMode::Revision),
            "learning" => Ok(LearnMode::Learning),
            _ => Err(format!(
                "Unknown mode: {value} (expected \"revision\" or \"learning\")"
            )),
        }
    }
}

/// Request body for the generation endpoint.
#[derive(Debug, Serialize)]
pub struct GenerateLessonRequest<'a> {
    pub topic: &'a str,
    #[serde(rename = "learnMode")]
    pub learn_mode: LearnMode,
}

/// Response body from the generation endpoint.
///
/// An absent `cards` key deserializes to an empty deck; callers treat the
/// empty deck as the "no cards generated" outcome rather than a failure.
#[derive(Debug, Deserialize)]
pub struct GenerateLessonResponse {
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Categories of lesson client errors for logging and tests.
///
/// The UI collapses all of these into one fixed connectivity message; the
/// kind is kept for diagnosis only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonErrorKind {
    /// HTTP status error (4xx, 5xx).
    HttpStatus,
    /// Connection or request timeout.
    Timeout,
    /// Connection-level failure (DNS, refused, reset).
    Transport,
    /// Response body failed to parse as the expected shape.
    Parse,
}

impl fmt::Display for LessonErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LessonErrorKind::HttpStatus => write!(f, "http_status"),
            LessonErrorKind::Timeout => write!(f, "timeout"),
            LessonErrorKind::Transport => write!(f, "transport"),
            LessonErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Structured error from the lesson client with kind and details.
#[derive(Debug, Clone)]
pub struct LessonError {
    pub kind: LessonErrorKind,
    /// One-line summary suitable for logs.
    pub message: String,
    /// Optional raw detail (e.g., response body).
    pub details: Option<String>,
}

impl LessonError {
    pub fn new(kind: LessonErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an HTTP status error, keeping the body as detail.
    pub fn http_status(status: u16, body: &str) -> Self {
        Self {
            kind: LessonErrorKind::HttpStatus,
            message: format!("HTTP {status}"),
            details: (!body.is_empty()).then(|| body.to_string()),
        }
    }

    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(LessonErrorKind::Timeout, err.to_string())
        } else if err.is_decode() {
            Self::new(LessonErrorKind::Parse, err.to_string())
        } else {
            Self::new(LessonErrorKind::Transport, err.to_string())
        }
    }
}

impl fmt::Display for LessonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.kind)
    }
}

impl std::error::Error for LessonError {}

/// Result type for lesson client operations.
pub type LessonResult<T> = std::result::Result<T, LessonError>;

/// HTTP client for the lesson-generation server.
pub struct LessonClient {
    http: reqwest::Client,
    server_url: String,
}

impl LessonClient {
    /// Creates a client from the loaded config.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            server_url: config.server_url.clone(),
        })
    }

    /// Requests a deck for one topic in the given mode.
    ///
    /// Returns the deck on success (possibly empty — the caller distinguishes
    /// the empty-deck outcome from failures). All transport, status, and
    /// parse failures map to a [`LessonError`].
    pub async fn generate(&self, topic: &str, mode: LearnMode) -> LessonResult<Vec<Card>> {
        let request = GenerateLessonRequest {
            topic,
            learn_mode: mode,
        };
        debug!(topic, mode = %mode, url = %self.server_url, "requesting lesson");

        let response = self
            .http
            .post(&self.server_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| LessonError::from_reqwest(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LessonError::from_reqwest(&e))?;

        if !status.is_success() {
            return Err(LessonError::http_status(status.as_u16(), &body));
        }

        let parsed: GenerateLessonResponse = serde_json::from_str(&body)
            .map_err(|e| LessonError::new(LessonErrorKind::Parse, e.to_string()))?;

        Ok(parsed.cards)
    }
}
