#![forbid(unsafe_code)]

pub mod catalog;
pub mod decode;
pub mod error;
pub mod narration;
pub mod quiz_service;
pub mod slideshow;

pub use woodland_core::SlideshowTiming;

pub use decode::{
    DataUrlDecoder, DecodedUpload, FileDecoder, SelectedFile, UploadFile, decode_selection,
    decode_uploads,
};
pub use error::{CatalogError, DecodeError, NarrationError, QuizError, SlideshowError};
pub use narration::{
    NarrationService, NarrationStatus, Narrator, SilentNarrator, Utterance, VoiceParams,
};
pub use quiz_service::QuizService;
pub use slideshow::{Direction, PendingNavigation, SlideshowService, StageReport, UploadTicket};
