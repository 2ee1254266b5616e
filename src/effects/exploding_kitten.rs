//! Resolution of a drawn Exploding Kitten.

use tracing::debug;

use crate::core::Card;

use super::context::EffectContext;
use super::effect::CardEffect;

/// What happens to whoever draws a kitten.
///
/// Without a Defuse the drawer is eliminated on the spot, with no
/// questions asked. With one, a single prompt picks where the kitten
/// slides back into the pile: position 0 is the top, position
/// `deck_size` the very bottom, measured after the kitten left the
/// deck.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExplodingKitten;

impl CardEffect for ExplodingKitten {
    fn can_execute(&self, _context: &EffectContext<'_>) -> bool {
        true
    }

    fn execute(&self, context: &mut EffectContext<'_>) {
        let player = context.game.player_turn();

        if !context.game.player_has_card(player, Card::Defuse) {
            context.game.play_exploding_kitten(player);
            debug!("{} had no Defuse", player);
            context.output.display(&format!("{} exploded.", player));
            return;
        }

        let deck_size = context.game.deck_size();
        let index = context.input.read_integer(
            &format!(
                "Choose position to insert Exploding Kitten (0-{}): ",
                deck_size
            ),
            0,
            deck_size,
        );
        context.game.play_defuse(index, player);
        debug!("{} reinserted the kitten at position {}", player, index);
        context
            .output
            .display(&format!("{} defused the Exploding Kitten.", player));
    }
}
