#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    EmptyQuiz,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::EmptyQuiz => "No quiz questions are available.",
        }
    }
}
