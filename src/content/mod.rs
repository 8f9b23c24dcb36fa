//! Lesson text around the nets: shape riddles and multiple-choice quiz
//! questions.
//!
//! Text comes from an external [`ContentProvider`] (typically a language
//! model behind some transport the embedding app owns). Provider failures
//! never reach the caller: [`ContentService`] logs them and substitutes a
//! pre-authored fallback, so a lesson always has something to show.

/// Built-in fallback questions and riddles.
pub mod fallback;
/// Prompt text and quiz scenarios.
pub mod prompt;
/// Provider seam.
pub mod provider;
/// Quiz questions, response parsing and scoring.
pub mod quiz;
/// Provider wrapper with caching and fallbacks.
pub mod service;

use std::fmt;

pub use fallback::FallbackPool;
pub use prompt::{quiz_prompt, riddle_prompt, ContentRequest, QuizScenario};
pub use provider::{ContentProvider, OfflineProvider};
pub use quiz::{parse_quiz_response, QuizQuestion, QuizSession};
pub use service::ContentService;

/// Why a provider response could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The provider itself failed (transport, quota, offline).
    Provider(String),
    /// The provider answered with nothing.
    EmptyResponse,
    /// The response was not the JSON shape a quiz question needs.
    Malformed(String),
    /// The question parsed but breaks a quiz rule.
    InvalidQuestion(&'static str),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provider(msg) => write!(f, "content provider failed: {msg}"),
            Self::EmptyResponse => f.write_str("content provider returned nothing"),
            Self::Malformed(msg) => write!(f, "malformed quiz response: {msg}"),
            Self::InvalidQuestion(rule) => {
                write!(f, "invalid quiz question: {rule}")
            }
        }
    }
}

impl std::error::Error for ContentError {}
