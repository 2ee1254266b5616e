//! Per-resolution context: the collaborators one effect runs against.

use crate::core::GameState;
use crate::io::{InputSource, OutputSink};

/// Everything one effect resolution touches.
///
/// Built fresh for each resolution and passed by reference down the
/// effect chain; wrappers hand the same context to the effect they
/// wrap. Through `&EffectContext` the table state is readable but not
/// writable, and the prompt methods (which take `&mut self`) are
/// unreachable, so a legality check cannot mutate anything or ask
/// anyone a question.
pub struct EffectContext<'a> {
    /// Table state under resolution.
    pub game: &'a mut GameState,
    /// Source of player decisions.
    pub input: &'a mut dyn InputSource,
    /// Sink for table messages.
    pub output: &'a mut dyn OutputSink,
}

impl<'a> EffectContext<'a> {
    /// Bundle the collaborators for one resolution.
    pub fn new(
        game: &'a mut GameState,
        input: &'a mut dyn InputSource,
        output: &'a mut dyn OutputSink,
    ) -> Self {
        Self {
            game,
            input,
            output,
        }
    }
}
