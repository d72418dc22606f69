mod ids;
mod question;
mod quiz;
mod slide;
mod slideshow;

pub use ids::SlideId;

pub use question::{OPTION_COUNT, Question, QuestionDraft, QuestionError};
pub use quiz::{AnswerOutcome, QuizProgress, QuizSession};
pub use slide::{ImageSource, ImageSourceError, Slide};
pub use slideshow::{
    Direction, NavigationStep, PendingNavigation, SlideshowSession, UploadFailure, UploadTicket,
};
