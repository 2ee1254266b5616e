//! Console adapters: prompts on a writer, answers from a line reader.
//!
//! Generic over `BufRead`/`Write` so tests can drive them with an
//! in-memory cursor. Prompts are printed without a trailing newline and
//! the writer is flushed before each read, matching the feel of an
//! inline `(y/n): ` question.

use std::io::{BufRead, Write};

use super::boundary::{InputSource, OutputSink};

/// Line-oriented input adapter with an unbounded re-prompt loop.
///
/// A closed input stream means the blocking contract can never be met,
/// so hitting end of input mid-game panics.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Interactive adapter over the process stdin/stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Create an adapter over any line reader and prompt writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn emit_prompt(&mut self, prompt: &str) {
        let result = write!(self.writer, "{}", prompt).and_then(|()| self.writer.flush());
        if let Err(err) = result {
            panic!("Console prompt failed: {}", err);
        }
    }

    fn next_line(&mut self) -> String {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => panic!("Console input closed mid-game"),
            Ok(_) => line,
            Err(err) => panic!("Console read failed: {}", err),
        }
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn read_integer(&mut self, prompt: &str, min: usize, max: usize) -> usize {
        loop {
            self.emit_prompt(prompt);
            if let Ok(value) = self.next_line().trim().parse::<usize>() {
                if value >= min && value <= max {
                    return value;
                }
            }
        }
    }

    fn read_yes_no(&mut self, prompt: &str) -> bool {
        loop {
            self.emit_prompt(prompt);
            match self.next_line().trim().to_lowercase().as_str() {
                "y" | "yes" | "1" => return true,
                "n" | "no" | "2" => return false,
                _ => {}
            }
        }
    }
}

/// Output adapter writing one line per message.
pub struct ConsoleOutput<W> {
    writer: W,
}

impl ConsoleOutput<std::io::Stdout> {
    /// Adapter over the process stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleOutput<W> {
    /// Create an adapter over any writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputSink for ConsoleOutput<W> {
    fn display(&mut self, message: &str) {
        if let Err(err) = writeln!(self.writer, "{}", message) {
            panic!("Console write failed: {}", err);
        }
    }
}
