//! Table setup: deal hands, seed the pile with kittens, shuffle.

use tracing::debug;

use crate::core::{Card, GameState, PlayerId};

/// Action and filler cards in the standard pile, before kittens.
const STANDARD_PILE: [(Card, usize); 5] = [
    (Card::Nope, 5),
    (Card::Shuffle, 4),
    (Card::DrawFromBottom, 4),
    (Card::TacoCat, 4),
    (Card::BeardCat, 4),
];

/// Builder for a ready-to-play table.
///
/// Setup follows the house rules: every player starts with one Defuse
/// plus a dealt hand from the kitten-free pile, then one kitten per
/// missing survivor (`players - 1`) is shuffled into what remains. That
/// count guarantees the pile never runs dry while two players live.
pub struct TableBuilder {
    player_count: usize,
    starting_hand_size: usize,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            starting_hand_size: 5,
        }
    }
}

impl TableBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of seats. Panics outside 2..=5.
    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        assert!((2..=5).contains(&count), "Tables seat 2 to 5 players");
        self.player_count = count;
        self
    }

    /// Opening hand size, counting the guaranteed Defuse. Panics if
    /// zero.
    #[must_use]
    pub fn starting_hand_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Opening hands need at least the Defuse");
        self.starting_hand_size = size;
        self
    }

    /// Build the shuffled, dealt table.
    ///
    /// Panics if the hands asked for would exhaust the standard pile.
    #[must_use]
    pub fn build(self, seed: u64) -> GameState {
        let pile: Vec<Card> = STANDARD_PILE
            .iter()
            .flat_map(|&(card, count)| std::iter::repeat(card).take(count))
            .collect();

        let dealt = self.player_count * (self.starting_hand_size - 1);
        assert!(
            dealt < pile.len(),
            "Cannot deal {} cards from a {}-card pile",
            dealt,
            pile.len()
        );

        let mut state = GameState::new(self.player_count, seed);
        state.set_deck(pile);
        state.shuffle_deck();

        for player in PlayerId::all(self.player_count) {
            state.add_to_hand(player, Card::Defuse);
            for _ in 1..self.starting_hand_size {
                let card = state.draw_from_top();
                state.add_to_hand(player, card);
            }
        }

        let mut deck = state.deck().to_vec();
        for _ in 1..self.player_count {
            deck.push(Card::ExplodingKitten);
        }
        state.set_deck(deck);
        state.shuffle_deck();

        debug!(
            "table ready: {} players, {} cards in the pile, seed {}",
            self.player_count,
            state.deck_size(),
            seed
        );
        state
    }
}
