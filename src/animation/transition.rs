//! A single in-flight camera move.

use glam::Vec3;
use web_time::{Duration, Instant};

use super::easing::EasingFunction;

/// One position interpolation from `start_position` to `target_position`.
///
/// Ephemeral: created on zone selection, dropped when complete or when a
/// newer task replaces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTask {
    /// Camera position when the task started.
    pub start_position: Vec3,
    /// Where the camera ends up.
    pub target_position: Vec3,
    /// Time the task started.
    pub start_time: Instant,
    /// Total length of the move.
    pub duration: Duration,
    /// Progress curve.
    pub easing: EasingFunction,
}

impl TransitionTask {
    /// Linear progress in `[0, 1]` at `now`.
    ///
    /// A zero duration is complete immediately.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether the task has reached its target at `now`.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Interpolated camera position at `now`. Exactly the target once
    /// progress reaches 1.
    #[must_use]
    pub fn position_at(&self, now: Instant) -> Vec3 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.target_position;
        }
        let t = self.easing.evaluate(progress);
        self.start_position.lerp(self.target_position, t)
    }
}
