use tracing::debug;
use woodland_core::model::{AnswerOutcome, Question, QuizProgress, QuizSession};

use crate::error::QuizError;

/// Steps through a fixed question list one answer at a time.
#[derive(Debug, Clone)]
pub struct QuizService {
    questions: Vec<Question>,
    session: QuizSession,
}

impl QuizService {
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        Ok(Self {
            questions,
            session: QuizSession::new(),
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The question awaiting an answer, or `None` once the quiz is finished.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.session.is_finished() {
            return None;
        }
        self.questions.get(self.session.current_index())
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.session.score()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        self.session.progress(self.questions.len())
    }

    /// Score `option` against the current question and move on.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` if every question has been answered.
    pub fn submit_answer(&mut self, option: &str) -> Result<AnswerOutcome, QuizError> {
        let position = self.session.current_index();
        let outcome = self
            .session
            .submit(&self.questions, option)
            .ok_or(QuizError::Finished)?;

        debug!(
            position,
            correct = outcome.correct,
            finished = outcome.finished,
            score = self.session.score(),
            "quiz answer submitted"
        );
        Ok(outcome)
    }

    /// Start over from the first question.
    pub fn reset(&mut self) {
        self.session.reset();
    }
}
