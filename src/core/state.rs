//! Table state: the shared draw pile, hands, turn order, eliminations.
//!
//! ## Deck orientation
//!
//! The draw pile is one shared `Vec<Card>` with the top at the end:
//! `draw_from_top` pops the end, `draw_from_bottom` removes index 0.
//! Defuse reinsertion positions count down from the top instead: position
//! 0 is the top of the pile, position `deck_size()` the very bottom.
//!
//! ## Contract faults
//!
//! The narrow mutators fault loudly (panic) on contract violations such
//! as removing a card nobody holds or drawing from an empty pile. Gate on
//! the query operations first; the mutators do not re-validate.

use smallvec::SmallVec;

use super::card::Card;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;

/// A player's hand. Hands stay small; eight inline slots cover the
/// common case without heap allocation.
pub type Hand = SmallVec<[Card; 8]>;

/// Complete table state.
///
/// Cheap to clone, and `PartialEq` so tests can snapshot a state and
/// assert that an operation moved nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    player_count: usize,
    /// Seat whose turn it is.
    turn: PlayerId,
    /// Shared draw pile, bottom at index 0, top at the end.
    deck: Vec<Card>,
    hands: PlayerMap<Hand>,
    alive: PlayerMap<bool>,
    rng: GameRng,
}

impl GameState {
    /// Create a fresh table with an empty draw pile and empty hands.
    ///
    /// Panics unless `player_count` is between 2 and 5.
    #[must_use]
    pub fn new(player_count: usize, seed: u64) -> Self {
        assert!(
            (2..=5).contains(&player_count),
            "Tables seat 2 to 5 players"
        );

        Self {
            player_count,
            turn: PlayerId::new(0),
            deck: Vec::new(),
            hands: PlayerMap::new(player_count, |_| Hand::new()),
            alive: PlayerMap::with_value(player_count, true),
            rng: GameRng::new(seed),
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Iterate over all seat IDs in seat order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count)
    }

    // === Turn ===

    /// Seat whose turn it is.
    #[must_use]
    pub fn player_turn(&self) -> PlayerId {
        self.turn
    }

    /// Hand the turn to a specific seat.
    ///
    /// Panics if the seat does not exist at this table.
    pub fn set_turn(&mut self, player: PlayerId) {
        assert!(
            player.index() < self.player_count,
            "No such seat at this table"
        );
        self.turn = player;
    }

    /// Advance the turn to the next living seat, wrapping around.
    ///
    /// Panics if nobody is left alive.
    pub fn advance_turn(&mut self) {
        assert!(self.living_player_count() > 0, "No living players left");

        let mut next = self.turn;
        loop {
            next = PlayerId::new(((next.index() + 1) % self.player_count) as u8);
            if self.alive[next] {
                break;
            }
        }
        self.turn = next;
    }

    // === Elimination ===

    /// Whether a seat has been eliminated.
    #[must_use]
    pub fn is_player_dead(&self, player: PlayerId) -> bool {
        !self.alive[player]
    }

    /// Number of seats still in the game.
    #[must_use]
    pub fn living_player_count(&self) -> usize {
        self.alive.iter().filter(|(_, alive)| **alive).count()
    }

    /// The sole survivor, if the game is down to one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        let mut living = self
            .alive
            .iter()
            .filter(|(_, alive)| **alive)
            .map(|(player, _)| player);
        match (living.next(), living.next()) {
            (Some(player), None) => Some(player),
            _ => None,
        }
    }

    /// Eliminate a seat. Their cards leave the game with them.
    pub fn play_exploding_kitten(&mut self, player: PlayerId) {
        self.alive[player] = false;
        self.hands[player].clear();
    }

    // === Hands ===

    /// Get a seat's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    /// Whether a seat holds at least one copy of `card`.
    #[must_use]
    pub fn player_has_card(&self, player: PlayerId, card: Card) -> bool {
        self.hands[player].contains(&card)
    }

    /// Add a card to a seat's hand.
    pub fn add_to_hand(&mut self, player: PlayerId, card: Card) {
        self.hands[player].push(card);
    }

    /// Add a card to the current turn holder's hand.
    pub fn add_card_to_hand(&mut self, card: Card) {
        self.add_to_hand(self.turn, card);
    }

    /// Remove one copy of `card` from a seat's hand.
    ///
    /// Panics if the seat holds no copy.
    pub fn remove_card_from_hand(&mut self, player: PlayerId, card: Card) {
        match self.hands[player].iter().position(|&c| c == card) {
            Some(pos) => {
                self.hands[player].remove(pos);
            }
            None => panic!("{} holds no {}", player, card),
        }
    }

    // === Draw pile ===

    /// The draw pile, bottom first.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Number of cards left in the draw pile.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Replace the draw pile. `deck[0]` is the bottom, the last element
    /// the top.
    pub fn set_deck(&mut self, deck: Vec<Card>) {
        self.deck = deck;
    }

    /// Draw the top card of the pile.
    ///
    /// Panics if the pile is empty.
    pub fn draw_from_top(&mut self) -> Card {
        match self.deck.pop() {
            Some(card) => card,
            None => panic!("Cannot draw from an empty deck"),
        }
    }

    /// Remove and return the bottom card of the pile.
    ///
    /// Panics if the pile is empty.
    pub fn draw_from_bottom(&mut self) -> Card {
        if self.deck.is_empty() {
            panic!("Cannot draw from an empty deck");
        }
        self.deck.remove(0)
    }

    /// Shuffle the draw pile once.
    pub fn shuffle_deck(&mut self) {
        self.rng.shuffle(&mut self.deck);
    }

    /// Shuffle the draw pile `times` times in a row.
    pub fn play_shuffle(&mut self, times: usize) {
        for _ in 0..times {
            self.shuffle_deck();
        }
    }

    /// Spend one Defuse from a seat's hand and slide the kitten back
    /// into the pile. `insert_index` counts from the top: 0 puts it on
    /// top, `deck_size()` at the very bottom.
    ///
    /// Panics if the index is past the bottom or the seat holds no
    /// Defuse.
    pub fn play_defuse(&mut self, insert_index: usize, player: PlayerId) {
        if insert_index > self.deck.len() {
            panic!(
                "Insert position {} is past the bottom of a {}-card deck",
                insert_index,
                self.deck.len()
            );
        }
        self.remove_card_from_hand(player, Card::Defuse);
        let pos = self.deck.len() - insert_index;
        self.deck.insert(pos, Card::ExplodingKitten);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(deck: &[Card], card: Card) -> usize {
        deck.iter().filter(|&&c| c == card).count()
    }

    #[test]
    fn test_new_table() {
        let state = GameState::new(3, 42);

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.player_turn(), PlayerId::new(0));
        assert_eq!(state.deck_size(), 0);
        assert_eq!(state.living_player_count(), 3);
        assert!(state.hand(PlayerId::new(2)).is_empty());
    }

    #[test]
    #[should_panic(expected = "2 to 5")]
    fn test_table_too_small() {
        let _ = GameState::new(1, 42);
    }

    #[test]
    fn test_draw_from_both_ends() {
        let mut state = GameState::new(2, 42);
        state.set_deck(vec![Card::TacoCat, Card::Nope, Card::Shuffle]);

        assert_eq!(state.draw_from_top(), Card::Shuffle);
        assert_eq!(state.draw_from_bottom(), Card::TacoCat);
        assert_eq!(state.deck(), &[Card::Nope]);
    }

    #[test]
    #[should_panic(expected = "empty deck")]
    fn test_draw_from_empty_deck() {
        let mut state = GameState::new(2, 42);
        state.draw_from_bottom();
    }

    #[test]
    fn test_hand_add_query_remove() {
        let mut state = GameState::new(2, 42);
        let p1 = PlayerId::new(1);

        state.add_to_hand(p1, Card::Nope);
        state.add_to_hand(p1, Card::Defuse);
        assert!(state.player_has_card(p1, Card::Nope));

        state.remove_card_from_hand(p1, Card::Nope);
        assert!(!state.player_has_card(p1, Card::Nope));
        assert_eq!(state.hand(p1), &[Card::Defuse]);
    }

    #[test]
    #[should_panic(expected = "holds no Nope")]
    fn test_remove_card_not_held() {
        let mut state = GameState::new(2, 42);
        state.remove_card_from_hand(PlayerId::new(0), Card::Nope);
    }

    #[test]
    fn test_add_card_to_hand_targets_turn_holder() {
        let mut state = GameState::new(3, 42);
        state.set_turn(PlayerId::new(2));

        state.add_card_to_hand(Card::BeardCat);

        assert_eq!(state.hand(PlayerId::new(2)), &[Card::BeardCat]);
        assert!(state.hand(PlayerId::new(0)).is_empty());
    }

    #[test]
    fn test_defuse_insert_at_top() {
        let mut state = GameState::new(2, 42);
        state.set_deck(vec![Card::TacoCat, Card::BeardCat]);
        state.add_to_hand(PlayerId::new(0), Card::Defuse);

        state.play_defuse(0, PlayerId::new(0));

        // Top of the pile is the end of the vec.
        assert_eq!(
            state.deck(),
            &[Card::TacoCat, Card::BeardCat, Card::ExplodingKitten]
        );
        assert!(!state.player_has_card(PlayerId::new(0), Card::Defuse));
    }

    #[test]
    fn test_defuse_insert_at_bottom() {
        let mut state = GameState::new(2, 42);
        state.set_deck(vec![Card::TacoCat, Card::BeardCat]);
        state.add_to_hand(PlayerId::new(0), Card::Defuse);

        state.play_defuse(2, PlayerId::new(0));

        assert_eq!(
            state.deck(),
            &[Card::ExplodingKitten, Card::TacoCat, Card::BeardCat]
        );
    }

    #[test]
    #[should_panic(expected = "holds no Defuse")]
    fn test_defuse_without_defuse() {
        let mut state = GameState::new(2, 42);
        state.play_defuse(0, PlayerId::new(0));
    }

    #[test]
    #[should_panic(expected = "past the bottom")]
    fn test_defuse_index_out_of_range() {
        let mut state = GameState::new(2, 42);
        state.add_to_hand(PlayerId::new(0), Card::Defuse);
        state.play_defuse(1, PlayerId::new(0));
    }

    #[test]
    fn test_elimination() {
        let mut state = GameState::new(3, 42);
        let p1 = PlayerId::new(1);
        state.add_to_hand(p1, Card::Nope);

        state.play_exploding_kitten(p1);

        assert!(state.is_player_dead(p1));
        assert!(state.hand(p1).is_empty());
        assert_eq!(state.living_player_count(), 2);
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_winner_when_one_remains() {
        let mut state = GameState::new(3, 42);
        state.play_exploding_kitten(PlayerId::new(0));
        state.play_exploding_kitten(PlayerId::new(2));

        assert_eq!(state.winner(), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_advance_turn_skips_dead() {
        let mut state = GameState::new(3, 42);
        state.play_exploding_kitten(PlayerId::new(1));

        state.advance_turn();

        assert_eq!(state.player_turn(), PlayerId::new(2));
    }

    #[test]
    fn test_advance_turn_wraps() {
        let mut state = GameState::new(2, 42);
        state.set_turn(PlayerId::new(1));

        state.advance_turn();

        assert_eq!(state.player_turn(), PlayerId::new(0));
    }

    #[test]
    fn test_shuffle_preserves_multiset() {
        let mut state = GameState::new(2, 42);
        let deck = vec![
            Card::Nope,
            Card::Nope,
            Card::Shuffle,
            Card::TacoCat,
            Card::ExplodingKitten,
            Card::DrawFromBottom,
        ];
        state.set_deck(deck.clone());

        state.play_shuffle(5);

        assert_eq!(state.deck_size(), deck.len());
        for card in Card::ALL {
            assert_eq!(count(state.deck(), card), count(&deck, card));
        }
    }

    #[test]
    fn test_snapshot_equality() {
        let mut state = GameState::new(2, 42);
        state.set_deck(vec![Card::TacoCat, Card::Nope]);
        let snapshot = state.clone();

        assert_eq!(state, snapshot);

        state.draw_from_top();
        assert_ne!(state, snapshot);
    }
}
