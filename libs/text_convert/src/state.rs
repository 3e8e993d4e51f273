use crate::{ConversionResult, Mode, convert};

/// Holds the current input and mode alongside the derived conversion result.
///
/// Every mutation immediately recomputes the result from the raw input. In
/// particular, changing the mode does not chain: it re-interprets the same
/// input instead of the previous output.
#[derive(Debug, Clone)]
pub struct ConverterState {
    input: String,
    mode: Mode,
    result: ConversionResult,
}

impl ConverterState {
    /// Creates a new state with empty input.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            input: String::new(),
            mode,
            result: ConversionResult::default(),
        }
    }

    /// The current raw input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The currently selected mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The result for the current input and mode.
    #[must_use]
    pub fn result(&self) -> &ConversionResult {
        &self.result
    }

    /// The output for the current input and mode.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.result.output
    }

    /// The warning of the last conversion, if any.
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.result.warning.as_deref()
    }

    /// Replaces the input and recomputes the result.
    pub fn set_input(&mut self, input: impl Into<String>) -> &ConversionResult {
        self.input = input.into();
        self.recompute()
    }

    /// Selects a different mode and recomputes the result.
    ///
    /// Any mode may follow any other.
    pub fn set_mode(&mut self, mode: Mode) -> &ConversionResult {
        self.mode = mode;
        self.recompute()
    }

    fn recompute(&mut self) -> &ConversionResult {
        self.result = convert(&self.input, self.mode);
        &self.result
    }
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
