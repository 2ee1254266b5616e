//! Effect system: what cards do when they resolve.
//!
//! The pieces:
//! - `CardEffect`: the two-method behavior contract
//! - `EffectContext`: the collaborators one resolution runs against
//! - `DrawFromBottom`, `ExplodingKitten`, `Shuffle`: the concrete
//!   behaviors
//! - `NopeInterceptor`: a veto round wrapped around another effect
//! - `EffectRegistry`: played card to resolving effect
//!
//! ## Design Philosophy
//!
//! Effects are stateless trait objects behind narrow seams. Legality
//! (`can_execute`) is separated from behavior (`execute`) so callers
//! can gate cheaply, and legality checks are read-only by construction.
//! Cancellation is composition, not a flag: wrapping an effect in
//! `NopeInterceptor` adds a veto round without the effect knowing, and
//! wrappers nest because they implement the contract they wrap.

mod context;
mod draw_from_bottom;
mod effect;
mod exploding_kitten;
mod nope;
mod registry;
mod shuffle;

pub use context::EffectContext;
pub use draw_from_bottom::DrawFromBottom;
pub use effect::CardEffect;
pub use exploding_kitten::ExplodingKitten;
pub use nope::NopeInterceptor;
pub use registry::EffectRegistry;
pub use shuffle::{Shuffle, MAX_SHUFFLES};
