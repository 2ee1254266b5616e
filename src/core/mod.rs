//! Core table types: cards, players, state, RNG.
//!
//! These are the building blocks the effect layer operates on. Card
//! behavior lives in `crate::effects`; everything here is data plus the
//! narrow operations effects consume.

pub mod card;
pub mod player;
pub mod rng;
pub mod state;

pub use card::Card;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{GameState, Hand};
