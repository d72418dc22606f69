use thiserror::Error;

use crate::model::{ImageSourceError, QuestionError};
use crate::timing::TimingError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    ImageSource(#[from] ImageSourceError),
    #[error(transparent)]
    Timing(#[from] TimingError),
}
