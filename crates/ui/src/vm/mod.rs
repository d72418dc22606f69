mod quiz_vm;
mod tour_vm;

pub use quiz_vm::{QuizQuestionVm, QuizResultVm, QuizScreenVm, map_quiz_screen};
pub use tour_vm::{PendingUploadVm, TourSlideVm, TourVm, map_tour};
