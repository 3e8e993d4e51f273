use std::fmt;

use crate::{Language, RecognitionEvent, RecognitionResult, Recognizer, RecognizerSettings};

/// The status line shown alongside the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    /// A session was requested but hasn't reported [`RecognitionEvent::Start`].
    Starting,
    Listening,
    Processing,
    Stopped,
    Cleared,
}

impl Status {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Starting => "Listening for your speech...",
            Self::Listening => "Listening...",
            Self::Processing => "Processing...",
            Self::Stopped => "Stopped listening.",
            Self::Cleared => "Cleared input",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// State of a voice-driven search box.
///
/// `on_search` is invoked with the trimmed query whenever a search is
/// performed, either through [`search`](Self::search) or the "search" voice
/// command.
///
/// Dropping this stops any running recognition session.
pub struct VoiceSearch<R: Recognizer, F> {
    recognizer: Option<R>,
    on_search: F,
    // set once the recognizer confirms the session started
    recognizing: bool,
    listening: bool,
    search_input: String,
    interim_result: String,
    status: Status,
    error: Option<String>,
    language: Language,
    confidence: u8,
}

impl<R: Recognizer, F> VoiceSearch<R, F> {
    /// Creates a new search box.
    ///
    /// `recognizer` is [`None`] when the platform has no speech recognition.
    /// The search box still works with typed input in that case.
    pub fn new(mut recognizer: Option<R>, language: Language, on_search: F) -> Self {
        let error = match &mut recognizer {
            Some(recognizer) => {
                recognizer.configure(&RecognizerSettings::new(language));
                None
            },
            None => Some("Speech recognition is not supported on this platform.".to_owned()),
        };

        Self {
            recognizer,
            on_search,
            recognizing: false,
            listening: false,
            search_input: String::new(),
            interim_result: String::new(),
            status: Status::Ready,
            error,
            language,
            confidence: 0,
        }
    }

    /// The current text of the search box.
    #[must_use]
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// The provisional transcript of the running session.
    #[must_use]
    pub fn interim_result(&self) -> &str {
        &self.interim_result
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The last error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether a session is running.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Confidence of the last final transcript, in percent.
    #[must_use]
    pub fn confidence(&self) -> u8 {
        self.confidence
    }

    /// Gets the recognizer, if the platform has one.
    #[must_use]
    pub fn recognizer(&self) -> Option<&R> {
        self.recognizer.as_ref()
    }

    /// Gets the recognizer mutably, i.e. to collect the events it reported.
    #[must_use]
    pub fn recognizer_mut(&mut self) -> Option<&mut R> {
        self.recognizer.as_mut()
    }

    /// Replaces the search input with typed text and clears the error.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.search_input = input.into();
        self.error = None;
    }

    /// Switches the recognition language.
    ///
    /// This stops any running session and reconfigures the recognizer.
    pub fn set_language(&mut self, language: Language) {
        self.stop_listening();
        self.language = language;

        if let Some(recognizer) = &mut self.recognizer {
            recognizer.configure(&RecognizerSettings::new(language));
        }
    }

    /// Starts a recognition session.
    ///
    /// Does nothing if one is already running.
    pub fn start_listening(&mut self) {
        let Some(recognizer) = &mut self.recognizer else {
            self.error = Some("Speech recognition is not initialized.".to_owned());
            return;
        };

        if self.recognizing {
            log::warn!("Recognition is already running.");
            return;
        }

        match recognizer.start() {
            Ok(()) => self.status = Status::Starting,
            Err(why) => {
                log::error!("Failed to start recognition: {why}");
                self.error = Some(format!("Failed to start listening: {why}"));
                self.stop_listening();
            },
        }
    }

    /// Stops the running recognition session, if any.
    pub fn stop_listening(&mut self) {
        if let Some(recognizer) = &mut self.recognizer
            && self.recognizing
            && let Err(why) = recognizer.stop()
        {
            log::error!("Failed to stop recognition: {why}");
        }

        self.status = Status::Stopped;
        self.listening = false;
        self.recognizing = false;
        self.interim_result.clear();
    }

    /// Starts a session if none is running, otherwise stops it.
    pub fn toggle_listening(&mut self) {
        if self.recognizing {
            self.stop_listening();
        } else {
            self.start_listening();
        }
    }
}

impl<R: Recognizer, F: FnMut(&str)> VoiceSearch<R, F> {
    /// Searches for the trimmed search input.
    ///
    /// Returns whether a search was performed, which is not the case when the
    /// input is blank.
    pub fn search(&mut self) -> bool {
        let query = self.search_input.trim();
        if query.is_empty() {
            return false;
        }

        log::debug!("Searching for {query:?}.");
        (self.on_search)(query);
        true
    }

    /// Applies an event reported by the recognizer.
    pub fn handle_event(&mut self, event: RecognitionEvent) {
        match event {
            RecognitionEvent::Start => {
                self.status = Status::Listening;
                self.listening = true;
                self.recognizing = true;
            },
            RecognitionEvent::Result(results) => self.handle_results(&results),
            RecognitionEvent::SpeechEnd => {
                self.status = Status::Processing;
                self.stop_listening();
            },
            RecognitionEvent::Error(why) => {
                self.error = Some(format!("Error occurred: {why}"));
                self.stop_listening();
            },
        }
    }

    fn handle_results(&mut self, results: &[RecognitionResult]) {
        let mut interim = String::new();
        let mut finished = String::new();

        for result in results {
            if result.is_final {
                finished.push_str(&result.transcript);
                self.confidence = to_percent(result.confidence);
            } else {
                interim.push_str(&result.transcript);
            }
        }

        if finished.is_empty() {
            self.interim_result = interim;
        } else {
            self.search_input = finished;
            self.interim_result.clear();
            self.run_voice_command();
        }
    }

    fn run_voice_command(&mut self) {
        let transcript = self.search_input.to_lowercase();
        if transcript.contains("clear") {
            self.search_input.clear();
            self.status = Status::Cleared;
        } else if transcript.contains("search") {
            self.search();
        }
    }
}

impl<R: Recognizer, F> Drop for VoiceSearch<R, F> {
    fn drop(&mut self) {
        self.stop_listening();
    }
}

impl<R: Recognizer + fmt::Debug, F> fmt::Debug for VoiceSearch<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceSearch")
            .field("recognizer", &self.recognizer)
            .field("listening", &self.listening)
            .field("search_input", &self.search_input)
            .field("interim_result", &self.interim_result)
            .field("status", &self.status)
            .field("error", &self.error)
            .field("language", &self.language)
            .field("confidence", &self.confidence)
            .finish_non_exhaustive()
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to 0..=100"
)]
fn to_percent(confidence: f32) -> u8 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u8
}
