//! Draw the bottom card of the pile instead of the top.

use tracing::debug;

use super::context::EffectContext;
use super::effect::CardEffect;

/// Takes the bottom card of the draw pile into the current player's
/// hand and announces what it was.
///
/// Always legal: the pile cannot run dry while the game is live, since
/// it keeps one kitten per missing survivor.
#[derive(Clone, Copy, Debug, Default)]
pub struct DrawFromBottom;

impl CardEffect for DrawFromBottom {
    fn can_execute(&self, _context: &EffectContext<'_>) -> bool {
        true
    }

    fn execute(&self, context: &mut EffectContext<'_>) {
        let card = context.game.draw_from_bottom();
        context.game.add_card_to_hand(card);
        debug!(
            "{} drew {} from the bottom",
            context.game.player_turn(),
            card
        );
        context
            .output
            .display(&format!("Drew from the bottom: {}", card));
    }
}
