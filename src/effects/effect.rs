//! The card behavior contract.

use super::context::EffectContext;

/// What a card does when it resolves.
///
/// Implementations are stateless values: one instance serves every
/// resolution, and everything that varies between resolutions arrives
/// through the context. New card behaviors are new implementing types;
/// nothing existing changes to accommodate them.
///
/// `can_execute` is the legality gate and `execute` the behavior.
/// Callers check the gate first; effects do not re-validate, and
/// skipping the gate trips the contract panics in `GameState` instead.
pub trait CardEffect {
    /// Whether the effect could legally run right now.
    ///
    /// Read-only by construction: the shared context exposes neither
    /// mutation nor prompts.
    fn can_execute(&self, context: &EffectContext<'_>) -> bool;

    /// Resolve the effect: prompt, mutate, report.
    fn execute(&self, context: &mut EffectContext<'_>);
}
