use crate::Language;

/// Settings applied to a [`Recognizer`] whenever the language changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognizerSettings {
    pub language: Language,
    /// Whether recognition keeps going after the first utterance.
    pub continuous: bool,
    /// Whether provisional transcripts are reported before the final one.
    pub interim_results: bool,
}

impl RecognizerSettings {
    /// Single-utterance recognition with interim results.
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self {
            language,
            continuous: false,
            interim_results: true,
        }
    }
}

/// Error reported by a [`Recognizer`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RecognizerError {
    /// A session is already running.
    #[error("recognition has already started")]
    AlreadyStarted,
    /// The recognizer failed in some other way.
    #[error("{0}")]
    Failed(String),
}

/// An external speech recognition capability.
///
/// Implementations report what they hear as [`RecognitionEvent`]s, which the
/// owner passes on to [`VoiceSearch::handle_event`](crate::VoiceSearch::handle_event).
pub trait Recognizer {
    /// Applies new settings. Takes effect for the next session.
    fn configure(&mut self, settings: &RecognizerSettings);

    /// Starts a recognition session.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the session cannot be started.
    fn start(&mut self) -> Result<(), RecognizerError>;

    /// Stops the running session.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the session cannot be stopped.
    fn stop(&mut self) -> Result<(), RecognizerError>;
}

impl<R: Recognizer + ?Sized> Recognizer for Box<R> {
    fn configure(&mut self, settings: &RecognizerSettings) {
        (**self).configure(settings);
    }

    fn start(&mut self) -> Result<(), RecognizerError> {
        (**self).start()
    }

    fn stop(&mut self) -> Result<(), RecognizerError> {
        (**self).stop()
    }
}

/// One alternative of a recognized phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionResult {
    pub transcript: String,
    /// Confidence in the range `0.0..=1.0`.
    pub confidence: f32,
    /// Whether this transcript won't change anymore.
    pub is_final: bool,
}

impl RecognitionResult {
    #[must_use]
    pub fn interim(transcript: impl Into<String>, confidence: f32) -> Self {
        Self {
            transcript: transcript.into(),
            confidence,
            is_final: false,
        }
    }

    #[must_use]
    pub fn finished(transcript: impl Into<String>, confidence: f32) -> Self {
        Self {
            transcript: transcript.into(),
            confidence,
            is_final: true,
        }
    }
}

/// An event raised by a [`Recognizer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEvent {
    /// The session has started listening.
    Start,
    /// The full list of results of the current session so far.
    Result(Vec<RecognitionResult>),
    /// The user stopped speaking.
    SpeechEnd,
    /// Recognition failed with the given reason.
    Error(String),
}
