mod speech;

pub use speech::{WebSpeechNarrator, speech_supported};
