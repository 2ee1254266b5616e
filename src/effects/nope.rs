//! Veto negotiation around another effect.

use tracing::debug;

use crate::core::Card;

use super::context::EffectContext;
use super::effect::CardEffect;

/// Wraps another effect and offers every opponent the chance to cancel
/// it with a Nope before it resolves.
///
/// The round visits seats in ascending order, skipping the acting
/// player, the eliminated, and anyone without a Nope in hand. The first
/// "yes" spends that player's Nope, announces the veto, and ends the
/// round; the wrapped effect never runs. If the round ends with no
/// veto, the wrapped effect resolves untouched. With nobody eligible
/// the round asks no questions at all.
///
/// The wrapper implements the same contract it wraps, so interceptors
/// nest: each layer runs its own round before deferring inward.
pub struct NopeInterceptor {
    wrapped: Box<dyn CardEffect>,
}

impl NopeInterceptor {
    /// Wrap an effect in a veto round.
    #[must_use]
    pub fn new(wrapped: Box<dyn CardEffect>) -> Self {
        Self { wrapped }
    }
}

impl CardEffect for NopeInterceptor {
    fn can_execute(&self, context: &EffectContext<'_>) -> bool {
        self.wrapped.can_execute(context)
    }

    fn execute(&self, context: &mut EffectContext<'_>) {
        let source = context.game.player_turn();
        let mut cancelled = false;

        for player in context.game.player_ids() {
            if player == source {
                continue;
            }
            if context.game.is_player_dead(player) {
                continue;
            }
            if !context.game.player_has_card(player, Card::Nope) {
                continue;
            }

            let play_nope = context
                .input
                .read_yes_no(&format!("{} has a NOPE. Play it? (y/n): ", player));
            if play_nope {
                context.game.remove_card_from_hand(player, Card::Nope);
                debug!("{} vetoed {}'s action", player, source);
                context.output.display(&format!("{} played NOPE.", player));
                cancelled = true;
                break;
            }
        }

        if !cancelled {
            self.wrapped.execute(context);
        } else {
            context.output.display("Action was cancelled by NOPE.");
        }
    }
}
