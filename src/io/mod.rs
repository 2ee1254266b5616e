//! Input and output boundaries.
//!
//! Two tiny traits separate the rules from the terminal:
//! - `InputSource`: blocking questions with unbounded re-prompting
//! - `OutputSink`: fire-and-forget table messages
//!
//! `ConsoleInput`/`ConsoleOutput` adapt them to real line-oriented I/O;
//! `ScriptedInput`/`RecordingOutput` drive the same code paths from
//! queues, which is how the test suites and benches play whole games.

mod boundary;
mod console;
mod scripted;

pub use boundary::{InputSource, OutputSink};
pub use console::{ConsoleInput, ConsoleOutput};
pub use scripted::{Prompt, RecordingOutput, ScriptedInput};
