//! Shuffle the draw pile a chosen number of times.

use tracing::debug;

use super::context::EffectContext;
use super::effect::CardEffect;

/// Upper bound on shuffle passes a player may request.
pub const MAX_SHUFFLES: usize = 100;

/// Shuffles the draw pile between 1 and [`MAX_SHUFFLES`] times, the
/// count chosen by the player. Every pass reorders the same cards; the
/// pile's contents never change.
#[derive(Clone, Copy, Debug, Default)]
pub struct Shuffle;

impl CardEffect for Shuffle {
    fn can_execute(&self, _context: &EffectContext<'_>) -> bool {
        true
    }

    fn execute(&self, context: &mut EffectContext<'_>) {
        let times = context.input.read_integer(
            &format!("Enter how many times to shuffle the deck (1-{}): ", MAX_SHUFFLES),
            1,
            MAX_SHUFFLES,
        );
        context.game.play_shuffle(times);
        debug!("deck shuffled {} times", times);
        context
            .output
            .display(&format!("Deck shuffled {} times.", times));
    }
}
