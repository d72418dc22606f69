use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every question offers exactly this many choices.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("option {option:?} appears more than once")]
    DuplicateOption { option: String },

    #[error("correct answer {answer:?} is not one of the options")]
    AnswerNotInOptions { answer: String },
}

//
// ─── DRAFT (unvalidated input) ─────────────────────────────────────────────────
//

/// Raw question as authored in a quiz file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    #[serde(rename = "question")]
    pub text: String,
    pub options: [String; OPTION_COUNT],
    #[serde(rename = "answer")]
    pub correct_answer: String,
}

impl QuestionDraft {
    pub fn new(
        text: impl Into<String>,
        options: [&str; OPTION_COUNT],
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            options: options.map(str::to_owned),
            correct_answer: correct_answer.into(),
        }
    }

    /// Validate the draft into an immutable `Question`.
    ///
    /// Options and the answer are compared verbatim; no trimming is applied
    /// because answers are matched by exact string equality.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the text or an option is blank, options
    /// repeat, or the answer is not among the options.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }

        for (index, option) in self.options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(QuestionError::EmptyOption { index });
            }
            if self.options[..index].contains(option) {
                return Err(QuestionError::DuplicateOption {
                    option: option.clone(),
                });
            }
        }

        if !self.options.contains(&self.correct_answer) {
            return Err(QuestionError::AnswerNotInOptions {
                answer: self.correct_answer,
            });
        }

        Ok(Question {
            text: self.text,
            options: self.options,
            correct_answer: self.correct_answer,
        })
    }
}

//
// ─── VALIDATED ENTITY ──────────────────────────────────────────────────────────
//

/// A multiple-choice question with one correct option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: [String; OPTION_COUNT],
    correct_answer: String,
}

impl Question {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Exact match against the correct answer.
    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft::new(
            "Which tree?",
            ["Maple", "Oak", "Spruce", "Palm"],
            "Spruce",
        )
    }

    #[test]
    fn validate_accepts_well_formed_question() {
        let question = draft().validate().unwrap();
        assert_eq!(question.text(), "Which tree?");
        assert_eq!(question.options()[2], "Spruce");
        assert!(question.is_correct("Spruce"));
        assert!(!question.is_correct("spruce"));
        assert!(!question.is_correct("Spruce "));
    }

    #[test]
    fn validate_rejects_blank_text() {
        let mut d = draft();
        d.text = "   ".into();
        assert_eq!(d.validate().unwrap_err(), QuestionError::EmptyText);
    }

    #[test]
    fn validate_rejects_blank_option() {
        let mut d = draft();
        d.options[1] = String::new();
        assert_eq!(
            d.validate().unwrap_err(),
            QuestionError::EmptyOption { index: 1 }
        );
    }

    #[test]
    fn validate_rejects_duplicate_options() {
        let d = QuestionDraft::new("Q", ["A", "B", "A", "C"], "A");
        assert_eq!(
            d.validate().unwrap_err(),
            QuestionError::DuplicateOption { option: "A".into() }
        );
    }

    #[test]
    fn validate_rejects_answer_outside_options() {
        let d = QuestionDraft::new("Q", ["A", "B", "C", "D"], "E");
        assert!(matches!(
            d.validate(),
            Err(QuestionError::AnswerNotInOptions { .. })
        ));
    }

    #[test]
    fn draft_reads_quiz_file_field_names() {
        let json = r#"{
            "question": "Which tree?",
            "options": ["Maple", "Oak", "Spruce", "Palm"],
            "answer": "Spruce"
        }"#;
        let parsed: QuestionDraft = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, draft());
    }
}
