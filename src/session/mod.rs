//! Table setup and the hot-seat game loop.
//!
//! The effect layer resolves one card at a time; this module supplies
//! the surrounding game: `TableBuilder` deals a ready table and
//! `GameSession` runs turns over it until someone wins.

mod builder;
mod game;

pub use builder::TableBuilder;
pub use game::{GameOutcome, GameSession};
