mod service;

// Public API of the slideshow subsystem.
pub use crate::error::SlideshowError;
pub use service::{SlideshowService, StageReport};
pub use woodland_core::model::{Direction, PendingNavigation, UploadFailure, UploadTicket};
