//! Scripted boundary doubles for tests, benches and replays.
//!
//! `ScriptedInput` answers prompts from pre-loaded queues and records
//! every prompt it was asked, so a test can assert on prompt traffic as
//! well as on resulting state. Running out of script is a bug in the
//! script, so it panics rather than inventing an answer; an empty
//! script doubles as proof that a code path asked no questions.

use std::collections::VecDeque;

use super::boundary::{InputSource, OutputSink};

/// One recorded prompt, with the bounds requested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prompt {
    /// An integer question with inclusive bounds.
    Integer {
        text: String,
        min: usize,
        max: usize,
    },
    /// A yes/no question.
    YesNo { text: String },
}

/// Queue-driven input source.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    integers: VecDeque<usize>,
    answers: VecDeque<bool>,
    prompts: Vec<Prompt>,
}

impl ScriptedInput {
    /// An empty script: any prompt at all will panic.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue integer answers, consumed in order.
    #[must_use]
    pub fn with_integers(mut self, values: impl IntoIterator<Item = usize>) -> Self {
        self.integers.extend(values);
        self
    }

    /// Queue yes/no answers, consumed in order.
    #[must_use]
    pub fn with_answers(mut self, values: impl IntoIterator<Item = bool>) -> Self {
        self.answers.extend(values);
        self
    }

    /// Every prompt asked so far, in order.
    #[must_use]
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    /// Number of prompts asked so far.
    #[must_use]
    pub fn prompt_count(&self) -> usize {
        self.prompts.len()
    }

    /// Whether every queued answer has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.integers.is_empty() && self.answers.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn read_integer(&mut self, prompt: &str, min: usize, max: usize) -> usize {
        self.prompts.push(Prompt::Integer {
            text: prompt.to_string(),
            min,
            max,
        });
        let value = match self.integers.pop_front() {
            Some(value) => value,
            None => panic!("Script ran out of integer answers at: {}", prompt),
        };
        // A scripted answer outside the requested bounds is a script
        // bug, not a re-prompt case.
        assert!(
            value >= min && value <= max,
            "Scripted answer {} outside {}..={} at: {}",
            value,
            min,
            max,
            prompt
        );
        value
    }

    fn read_yes_no(&mut self, prompt: &str) -> bool {
        self.prompts.push(Prompt::YesNo {
            text: prompt.to_string(),
        });
        match self.answers.pop_front() {
            Some(answer) => answer,
            None => panic!("Script ran out of yes/no answers at: {}", prompt),
        }
    }
}

/// Output sink that collects messages for assertions.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    messages: Vec<String>,
}

impl RecordingOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message displayed so far, in order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Whether any displayed message contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl OutputSink for RecordingOutput {
    fn display(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
