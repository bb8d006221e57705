//! Time-bounded camera transitions for zone selection.

/// The per-viewport transition driver.
pub mod animator;
/// Progress curves.
pub mod easing;
/// A single in-flight move.
pub mod transition;

pub use animator::TransitionAnimator;
pub use easing::EasingFunction;
pub use transition::TransitionTask;
