//! Loading quiz questions from a JSON file.

use std::path::Path;

use woodland_core::model::{Question, QuestionDraft};

use crate::error::CatalogError;

/// Parse a JSON array of `{ "question", "options", "answer" }` objects.
///
/// # Errors
///
/// Returns `CatalogError` if the JSON is malformed, empty, or a question fails
/// validation.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, CatalogError> {
    let drafts: Vec<QuestionDraft> = serde_json::from_str(json)?;
    if drafts.is_empty() {
        return Err(CatalogError::Empty);
    }
    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            draft
                .validate()
                .map_err(|source| CatalogError::Question { index, source })
        })
        .collect()
}

/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read, otherwise the
/// errors of `parse_questions`.
pub fn load_questions(path: &Path) -> Result<Vec<Question>, CatalogError> {
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_questions(&json)
}
