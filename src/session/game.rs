//! Hot-seat turn loop driving the effect layer.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Card, GameState, PlayerId};
use crate::effects::{EffectContext, EffectRegistry};
use crate::io::{InputSource, OutputSink};

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// One player outlived everyone else.
    Winner(PlayerId),
    /// The defensive turn cap was reached with several players alive.
    TurnLimit,
}

impl GameOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameOutcome::Winner(p) if *p == player)
    }
}

/// One running game: turn order, menus, draws, and effect resolution.
///
/// Each turn, the current player may play any number of action cards
/// (each spent whether or not the table vetoes it) and then draws from
/// the top, which ends the turn. A hand with no action cards draws
/// immediately, without a menu. Drawn kittens resolve through the
/// registry, as does a kitten surfacing from a bottom draw.
pub struct GameSession<'a> {
    state: GameState,
    registry: EffectRegistry,
    input: &'a mut dyn InputSource,
    output: &'a mut dyn OutputSink,
    max_turns: usize,
}

impl<'a> GameSession<'a> {
    /// Create a session over a dealt table with the standard wiring.
    pub fn new(
        state: GameState,
        input: &'a mut dyn InputSource,
        output: &'a mut dyn OutputSink,
    ) -> Self {
        Self {
            state,
            registry: EffectRegistry::standard(),
            input,
            output,
            max_turns: 500,
        }
    }

    /// Swap in a different card wiring.
    #[must_use]
    pub fn with_registry(mut self, registry: EffectRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Cap the number of turns before the session gives up. The cap
    /// exists so a scripted game cannot loop forever.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// The table as it currently stands.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play until one player survives or the turn cap is hit.
    pub fn run(&mut self) -> GameOutcome {
        let mut turns = 0;
        loop {
            if let Some(winner) = self.state.winner() {
                info!("{} wins after {} turns", winner, turns);
                self.output.display(&format!("{} wins!", winner));
                return GameOutcome::Winner(winner);
            }
            if turns >= self.max_turns {
                info!("turn cap of {} reached, calling it off", self.max_turns);
                return GameOutcome::TurnLimit;
            }
            turns += 1;

            self.play_turn();

            if self.state.winner().is_none() {
                self.state.advance_turn();
            }
        }
    }

    /// One player's whole turn: optional plays, then the ending draw.
    fn play_turn(&mut self) {
        loop {
            let player = self.state.player_turn();
            self.show_hand(player);

            let choices = self.action_choices(player);
            let choice = if choices.is_empty() {
                0
            } else {
                let prompt = menu_prompt(player, &choices);
                self.input.read_integer(&prompt, 0, choices.len())
            };

            if choice == 0 {
                self.draw_to_end_turn(player);
                return;
            }

            let card = choices[choice - 1];
            // The card is spent even if the table vetoes it.
            self.state.remove_card_from_hand(player, card);
            debug!("{} plays {}", player, card);

            let deck_before = self.state.deck_size();
            self.resolve(card);

            if card == Card::DrawFromBottom && self.state.deck_size() < deck_before {
                // The bottom draw replaced this turn's ending draw.
                self.surface_bottom_drawn_kitten(player);
                return;
            }
            if self.state.is_player_dead(player) {
                return;
            }
        }
    }

    /// Distinct playable action cards in hand, in catalog order.
    fn action_choices(&self, player: PlayerId) -> Vec<Card> {
        Card::ALL
            .into_iter()
            .filter(|card| card.is_action_card() && self.state.player_has_card(player, *card))
            .collect()
    }

    fn show_hand(&mut self, player: PlayerId) {
        let cards = self
            .state
            .hand(player)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        self.output.display(&format!("{}'s hand: {}", player, cards));
    }

    /// The mandatory top draw that ends a turn.
    fn draw_to_end_turn(&mut self, player: PlayerId) {
        let card = self.state.draw_from_top();
        if card == Card::ExplodingKitten {
            self.output
                .display(&format!("{} drew an Exploding Kitten!", player));
            self.resolve(Card::ExplodingKitten);
        } else {
            self.state.add_to_hand(player, card);
            self.output.display(&format!("{} drew a card.", player));
        }
    }

    /// A bottom draw can pull up a kitten; it never stays in the hand.
    fn surface_bottom_drawn_kitten(&mut self, player: PlayerId) {
        if self.state.player_has_card(player, Card::ExplodingKitten) {
            self.state
                .remove_card_from_hand(player, Card::ExplodingKitten);
            self.output
                .display(&format!("{} drew an Exploding Kitten!", player));
            self.resolve(Card::ExplodingKitten);
        }
    }

    /// Resolve a card through the registry, gated on legality.
    fn resolve(&mut self, card: Card) {
        let Some(effect) = self.registry.get(card) else {
            return;
        };
        let mut context =
            EffectContext::new(&mut self.state, &mut *self.input, &mut *self.output);
        if effect.can_execute(&context) {
            effect.execute(&mut context);
        }
    }
}

fn menu_prompt(player: PlayerId, choices: &[Card]) -> String {
    let mut prompt = format!("{}: 0 = draw", player);
    for (i, card) in choices.iter().enumerate() {
        prompt.push_str(&format!(", {} = play {}", i + 1, card));
    }
    prompt.push_str(": ");
    prompt
}
