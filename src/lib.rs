//! # kitten-rules
//!
//! Rules engine for an Exploding Kittens-style card game: what happens
//! when a card is played, and how the rest of the table can stop it.
//!
//! ## Design Principles
//!
//! 1. **Effects Are Capabilities**: A card's behavior is a `CardEffect`
//!    trait object with a read-only legality gate (`can_execute`) and a
//!    resolving `execute`. New cards are new types, never edits.
//!
//! 2. **Cancellation Is Composition**: `NopeInterceptor` wraps any
//!    effect and runs a veto round first. Wrappers implement the same
//!    contract they wrap, so they nest without special cases.
//!
//! 3. **I/O Behind Seams**: All prompting and reporting goes through
//!    `InputSource`/`OutputSink`, which is how whole games run
//!    unattended in tests and benches.
//!
//! ## Modules
//!
//! - `core`: cards, seats, table state, RNG
//! - `effects`: the behavior contract, concrete effects, veto wrapper,
//!   registry
//! - `io`: boundary traits, console adapters, scripted doubles
//! - `session`: table setup and the hot-seat turn loop

pub mod core;
pub mod effects;
pub mod io;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Card, GameRng, GameState, Hand, PlayerId, PlayerMap};

pub use crate::effects::{
    CardEffect, DrawFromBottom, EffectContext, EffectRegistry, ExplodingKitten, NopeInterceptor,
    Shuffle, MAX_SHUFFLES,
};

pub use crate::io::{
    ConsoleInput, ConsoleOutput, InputSource, OutputSink, Prompt, RecordingOutput, ScriptedInput,
};

pub use crate::session::{GameOutcome, GameSession, TableBuilder};
