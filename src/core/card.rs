//! Card taxonomy.
//!
//! The catalog is deliberately small: the three action cards with real
//! behavior (`Shuffle`, `DrawFromBottom`, and the drawn-only
//! `ExplodingKitten`), the two reactive cards (`Defuse`, `Nope`), and a
//! couple of inert cat cards as deck filler. Behavior lives in
//! `crate::effects`; a card value is pure data.

use serde::{Deserialize, Serialize};

/// One card type at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Eliminates the drawer unless defused. Never sits in a hand.
    ExplodingKitten,
    /// Cancels a drawn kitten; the holder reinserts it into the deck.
    Defuse,
    /// Cancels another player's action card.
    Nope,
    /// Shuffle the draw pile a chosen number of times.
    Shuffle,
    /// Draw the bottom card of the pile instead of the top.
    DrawFromBottom,
    /// Inert filler.
    TacoCat,
    /// Inert filler.
    BeardCat,
}

impl Card {
    /// Every card type, in a fixed order. Handy for building decks and
    /// sampling in tests.
    pub const ALL: [Card; 7] = [
        Card::ExplodingKitten,
        Card::Defuse,
        Card::Nope,
        Card::Shuffle,
        Card::DrawFromBottom,
        Card::TacoCat,
        Card::BeardCat,
    ];

    /// Whether this card is played proactively on the holder's own turn.
    ///
    /// Reactive cards (`Defuse`, `Nope`) and the kitten resolve through
    /// other channels; cats have no behavior at all.
    #[must_use]
    pub fn is_action_card(self) -> bool {
        matches!(self, Card::Shuffle | Card::DrawFromBottom)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Card::ExplodingKitten => "Exploding Kitten",
            Card::Defuse => "Defuse",
            Card::Nope => "Nope",
            Card::Shuffle => "Shuffle",
            Card::DrawFromBottom => "Draw From Bottom",
            Card::TacoCat => "Taco Cat",
            Card::BeardCat => "Beard Cat",
        };
        write!(f, "{}", name)
    }
}
