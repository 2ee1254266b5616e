//! The prompt boundary between effects and the outside world.
//!
//! Effects never touch stdin or stdout. They ask questions through
//! `InputSource` and report through `OutputSink`, so the same effect
//! code runs against a terminal, a scripted test, or a bench harness.

/// Blocking source of player decisions.
///
/// Both methods block until an acceptable answer arrives. Rejected
/// input is the source's problem: it re-asks without limit and callers
/// never see a bad value.
pub trait InputSource {
    /// Ask for an integer in `min..=max` (inclusive).
    ///
    /// Malformed and out-of-range input is rejected silently and the
    /// question re-asked; there is no retry cap.
    fn read_integer(&mut self, prompt: &str, min: usize, max: usize) -> usize;

    /// Ask a yes/no question.
    ///
    /// Affirmative answers are `y`, `yes` and `1`; negative answers are
    /// `n`, `no` and `2`. Matching is case-insensitive and ignores
    /// surrounding whitespace. Anything else is re-asked.
    fn read_yes_no(&mut self, prompt: &str) -> bool;
}

/// Fire-and-forget sink for table messages.
pub trait OutputSink {
    /// Show one message to the table.
    fn display(&mut self, message: &str);
}
