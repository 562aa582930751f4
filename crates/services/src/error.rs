//! Shared error types for the services crate.

use thiserror::Error;

use couple_core::fast_talk::{SessionError, TimeBudgetError};
use couple_core::model::CategoryId;

/// Errors emitted by a `QuestionSource`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSourceError {
    #[error("question request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("asked for {expected} questions but got {got}")]
    CategoryMismatch { expected: CategoryId, got: CategoryId },
}

/// Errors emitted while loading the question catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to load questions")]
    NothingLoaded,
}

/// Errors in source configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid questions url {raw:?}: {source}")]
    InvalidUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("questions url must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}

/// Errors emitted by `FastTalkService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FastTalkError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Budget(#[from] TimeBudgetError),
    #[error("no suggestion at position {0}")]
    UnknownSuggestion(usize),
}
