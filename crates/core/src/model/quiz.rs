use crate::model::Question;

/// Result of submitting one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub finished: bool,
}

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// Zero-based index of the question being shown.
    pub position: usize,
    pub total: usize,
    pub score: u32,
    pub finished: bool,
}

/// Position, score and completion of one pass through a question list.
///
/// `finished` becomes true exactly when the position would move past the last
/// question; the position itself never leaves `[0, question_count)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizSession {
    current_index: usize,
    score: u32,
    finished: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn progress(&self, total: usize) -> QuizProgress {
        QuizProgress {
            position: self.current_index,
            total,
            score: self.score,
            finished: self.finished,
        }
    }

    /// Score `option` against the current question and advance.
    ///
    /// Returns `None` without touching state when the session is already
    /// finished or there is no question at the current position.
    pub fn submit(&mut self, questions: &[Question], option: &str) -> Option<AnswerOutcome> {
        if self.finished {
            return None;
        }
        let question = questions.get(self.current_index)?;

        let correct = question.is_correct(option);
        if correct {
            self.score = self.score.saturating_add(1);
        }

        let next = self.current_index + 1;
        if next < questions.len() {
            self.current_index = next;
        } else {
            self.finished = true;
        }

        Some(AnswerOutcome {
            correct,
            finished: self.finished,
        })
    }

    /// Back to the first question with a zero score.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
