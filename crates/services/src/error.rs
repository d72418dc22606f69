//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use woodland_core::model::{ImageSourceError, QuestionError};

/// Errors emitted by `QuizService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz has no questions")]
    Empty,
    #[error("quiz already finished")]
    Finished,
}

/// Errors emitted by `SlideshowService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SlideshowError {
    #[error("no staged upload at index {index} (staged: {len})")]
    NoSuchUpload { index: usize, len: usize },
}

/// Errors reported by a `Narrator`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NarrationError {
    #[error("speech output is unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted while turning an uploaded file into an image source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("file is empty")]
    Empty,
    #[error("file is too large ({size} bytes, limit {max})")]
    TooLarge { size: usize, max: usize },
    #[error("file is not a supported image")]
    UnsupportedFormat,
    #[error("file could not be read: {0}")]
    Unreadable(String),
    #[error(transparent)]
    InvalidDataUrl(#[from] ImageSourceError),
}

/// Errors emitted while loading a quiz file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("quiz file has no questions")]
    Empty,
    #[error("failed to read quiz file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
    #[error("question {index} is invalid")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
}
