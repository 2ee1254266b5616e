//! Dispatch from a played card to the effect that resolves it.

use rustc_hash::FxHashMap;

use crate::core::Card;

use super::draw_from_bottom::DrawFromBottom;
use super::effect::CardEffect;
use super::exploding_kitten::ExplodingKitten;
use super::nope::NopeInterceptor;
use super::shuffle::Shuffle;

/// Lookup table from card to resolving effect.
///
/// The standard wiring puts a veto round around the player-initiated
/// action cards; a drawn kitten resolves bare, since nobody can Nope a
/// draw. New card behaviors arrive through `register` without touching
/// the wrapper or any dispatch code: wrap the effect at registration
/// time if the card should be vetoable, register it bare if not.
#[derive(Default)]
pub struct EffectRegistry {
    effects: FxHashMap<Card, Box<dyn CardEffect>>,
}

impl EffectRegistry {
    /// Create an empty registry. Nothing resolves until registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard table wiring.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(
            Card::Shuffle,
            Box::new(NopeInterceptor::new(Box::new(Shuffle))),
        );
        registry.register(
            Card::DrawFromBottom,
            Box::new(NopeInterceptor::new(Box::new(DrawFromBottom))),
        );
        registry.register(Card::ExplodingKitten, Box::new(ExplodingKitten));
        registry
    }

    /// Register the effect resolving `card`, replacing any previous
    /// registration. Variant rule sets override the standard wiring
    /// this way.
    pub fn register(&mut self, card: Card, effect: Box<dyn CardEffect>) {
        self.effects.insert(card, effect);
    }

    /// Get the effect for a card, if it has one.
    #[must_use]
    pub fn get(&self, card: Card) -> Option<&dyn CardEffect> {
        self.effects.get(&card).map(Box::as_ref)
    }

    /// Whether a card has a registered effect.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.effects.contains_key(&card)
    }

    /// Number of registered card behaviors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
