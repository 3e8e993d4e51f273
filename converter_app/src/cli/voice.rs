//! Drives the voice search box from a script instead of a microphone.
//!
//! Each script line is one step. User actions:
//!
//! - `listen`, `stop`, `toggle`: the listen button.
//! - `type <text>`: replaces the search input.
//! - `search`: the search button.
//! - `language <code>`: selects a recognition language.
//!
//! Recognizer events, only delivered while a session is running:
//!
//! - `interim <confidence> <text>`, `final <confidence> <text>`
//! - `speechend`
//! - `error <reason>`
//!
//! Blank lines and lines starting with `#` are skipped.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::mem;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context as _, Result, bail};
use clap::Args;
use voice_search::{
    Language, RecognitionEvent, RecognitionResult, Recognizer, RecognizerError,
    RecognizerSettings, VoiceSearch,
};

use crate::config::Config;

#[derive(Debug, Args)]
pub struct VoiceArgs {
    /// The recognition language, i.e. `en-US`. Defaults to the configured one.
    #[arg(short, long)]
    language: Option<Language>,

    /// The script to run. Read from stdin if omitted.
    script: Option<PathBuf>,
}

impl VoiceArgs {
    pub fn run(self, config: &Config) -> Result<ExitCode> {
        let language = self.language.unwrap_or(config.voice.language);
        let out = io::stdout().lock();

        let searches = match &self.script {
            Some(path) => {
                let file = fs::File::open(path)
                    .with_context(|| format!("cannot open voice script {path:?}"))?;
                run_script(BufReader::new(file), out, language)?
            },
            None => run_script(io::stdin().lock(), out, language)?,
        };

        log::info!("{} search(es) performed.", searches.len());
        Ok(ExitCode::SUCCESS)
    }
}

/// A [`Recognizer`] whose results are injected by the script.
#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    active: bool,
    settings: Option<RecognizerSettings>,
    pending: VecDeque<RecognitionEvent>,
}

impl ScriptedRecognizer {
    /// Queues an event if a session is running.
    fn emit(&mut self, event: RecognitionEvent) -> bool {
        if self.active {
            self.pending.push_back(event);
        }

        self.active
    }

    fn take_events(&mut self) -> Vec<RecognitionEvent> {
        Vec::from(mem::take(&mut self.pending))
    }
}

impl Recognizer for ScriptedRecognizer {
    fn configure(&mut self, settings: &RecognizerSettings) {
        log::debug!("Recognizer configured for {}.", settings.language.name());
        self.settings = Some(*settings);
    }

    fn start(&mut self) -> Result<(), RecognizerError> {
        if self.active {
            return Err(RecognizerError::AlreadyStarted);
        }

        self.active = true;
        self.pending.push_back(RecognitionEvent::Start);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), RecognizerError> {
        self.active = false;
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
enum Step {
    Listen,
    Stop,
    Toggle,
    Type(String),
    Search,
    Language(Language),
    Event(RecognitionEvent),
}

fn parse_step(line: &str) -> Result<Option<Step>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = line
        .trim_start()
        .split_once(' ')
        .unwrap_or((trimmed, ""));

    let step = match command {
        "listen" => Step::Listen,
        "stop" => Step::Stop,
        "toggle" => Step::Toggle,
        "type" => Step::Type(rest.to_owned()),
        "search" => Step::Search,
        "language" => Step::Language(rest.parse()?),
        "interim" | "final" => {
            let (confidence, transcript) = rest.split_once(' ').unwrap_or((rest, ""));
            let confidence = confidence
                .parse::<f32>()
                .with_context(|| format!("invalid confidence {confidence:?}"))?;

            let result = if command == "final" {
                RecognitionResult::finished(transcript, confidence)
            } else {
                RecognitionResult::interim(transcript, confidence)
            };

            Step::Event(RecognitionEvent::Result(vec![result]))
        },
        "speechend" => Step::Event(RecognitionEvent::SpeechEnd),
        "error" => Step::Event(RecognitionEvent::Error(rest.trim().to_owned())),
        _ => bail!("unknown step {command:?}"),
    };

    Ok(Some(step))
}

/// Runs a script, printing the search box state after every step.
///
/// Returns the queries that were searched for.
pub fn run_script<B: BufRead, W: Write>(
    script: B,
    mut out: W,
    language: Language,
) -> Result<Vec<String>> {
    let searches = RefCell::new(Vec::new());

    {
        let on_search = |query: &str| {
            log::info!("Searching for: {query}");
            searches.borrow_mut().push(query.to_owned());
        };

        let recognizer = ScriptedRecognizer::default();
        let mut search = VoiceSearch::new(Some(recognizer), language, on_search);

        for (index, line) in script.lines().enumerate() {
            let line_no = index + 1;
            let line = line.context("cannot read voice script")?;
            let step = parse_step(&line).with_context(|| format!("invalid step on line {line_no}"))?;
            let Some(step) = step else {
                continue;
            };

            apply_step(&mut search, step, line_no);

            // hand over whatever the recognizer reported in response
            let events = search
                .recognizer_mut()
                .map(ScriptedRecognizer::take_events)
                .unwrap_or_default();

            for event in events {
                search.handle_event(event);
            }

            print_state(&mut out, &search)?;
        }
    }

    Ok(searches.into_inner())
}

fn apply_step<F: FnMut(&str)>(
    search: &mut VoiceSearch<ScriptedRecognizer, F>,
    step: Step,
    line_no: usize,
) {
    match step {
        Step::Listen => search.start_listening(),
        Step::Stop => search.stop_listening(),
        Step::Toggle => search.toggle_listening(),
        Step::Type(text) => search.set_input(text),
        Step::Search => _ = search.search(),
        Step::Language(language) => search.set_language(language),
        Step::Event(event) => {
            let delivered = search.recognizer_mut().is_some_and(|r| r.emit(event));
            if !delivered {
                log::warn!("Line {line_no}: no recognition session is running.");
            }
        },
    }
}

fn print_state<W: Write, F>(
    out: &mut W,
    search: &VoiceSearch<ScriptedRecognizer, F>,
) -> io::Result<()> {
    writeln!(
        out,
        "[{}] input: {:?} confidence: {}%",
        search.status(),
        search.search_input(),
        search.confidence(),
    )?;

    if !search.interim_result().is_empty() {
        writeln!(out, "  hearing: {}", search.interim_result())?;
    }

    if let Some(error) = search.error() {
        writeln!(out, "  error: {error}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> (Vec<String>, String) {
        let mut out = Vec::new();
        let searches = run_script(script.as_bytes(), &mut out, Language::EN_US)
            .expect("script must run");

        (searches, String::from_utf8(out).expect("output is utf-8"))
    }

    #[test]
    fn spoken_search_command() {
        let (searches, out) = run(
            "listen\n\
             interim 0.4 search for\n\
             final 0.93 search for cats\n\
             speechend\n",
        );

        assert_eq!(searches, ["search for cats"]);
        assert_eq!(
            out,
            "[Listening...] input: \"\" confidence: 0%\n\
             [Listening...] input: \"\" confidence: 0%\n  hearing: search for\n\
             [Listening...] input: \"search for cats\" confidence: 93%\n\
             [Stopped listening.] input: \"search for cats\" confidence: 93%\n"
        );
    }

    #[test]
    fn spoken_clear_command() {
        let (searches, out) = run("type dogs\nlisten\nfinal 0.8 clear\n");

        assert!(searches.is_empty());
        assert!(out.ends_with("[Cleared input] input: \"\" confidence: 80%\n"), "{out}");
    }

    #[test]
    fn events_without_session_are_ignored() {
        let (searches, out) = run("final 0.9 search now\n");

        assert!(searches.is_empty());
        assert_eq!(out, "[Ready] input: \"\" confidence: 0%\n");
    }

    #[test]
    fn typed_search() {
        let (searches, _) = run("# comment\n\ntype   red shoes \nsearch\ntype \nsearch\n");
        assert_eq!(searches, ["red shoes"]);
    }

    #[test]
    fn recognizer_error() {
        let (_, out) = run("toggle\nerror network\n");
        assert!(
            out.ends_with("[Stopped listening.] input: \"\" confidence: 0%\n  error: Error occurred: network\n"),
            "{out}"
        );
    }

    #[test]
    fn parse_steps() {
        assert_eq!(parse_step("  ").expect("blank"), None);
        assert_eq!(
            parse_step("language ja-JP").expect("valid"),
            Some(Step::Language(Language::JA_JP))
        );
        assert_eq!(
            parse_step("interim 0.5 hello there").expect("valid"),
            Some(Step::Event(RecognitionEvent::Result(vec![
                RecognitionResult::interim("hello there", 0.5)
            ])))
        );
        parse_step("interim high hello").expect_err("confidence is not a number");
        parse_step("language xx-XX").expect_err("language is unsupported");
        parse_step("dance").expect_err("unknown step");
    }

    #[test]
    fn language_step_reconfigures() {
        let mut out = Vec::new();
        let recognizer = ScriptedRecognizer::default();
        let mut search = VoiceSearch::new(Some(recognizer), Language::EN_US, |_: &str| {});

        apply_step(&mut search, Step::Language(Language::DE_DE), 1);
        print_state(&mut out, &search).expect("write to Vec cannot fail");

        let settings = search.recognizer().and_then(|r| r.settings);
        assert_eq!(settings.map(|s| s.language), Some(Language::DE_DE));
    }
}
