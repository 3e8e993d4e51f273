//! A voice-driven search box on top of an external speech recognizer.
//!
//! The recognizer itself is platform-specific and supplied by the caller as a
//! [`Recognizer`]. Its events are fed back into [`VoiceSearch::handle_event`],
//! which keeps track of the search input, the interim transcript and a
//! user-facing status line, and runs the "clear" and "search" voice commands.

mod language;
mod recognizer;
mod search;

pub use language::{Language, UnknownLanguage};
pub use recognizer::{
    RecognitionEvent, RecognitionResult, Recognizer, RecognizerError, RecognizerSettings,
};
pub use search::{Status, VoiceSearch};
