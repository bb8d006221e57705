//! Drives at most one camera transition at a time.

use glam::Vec3;
use web_time::{Duration, Instant};

use super::easing::EasingFunction;
use super::transition::TransitionTask;
use crate::camera::CameraHandle;

/// Interpolates a camera's position toward a target over a fixed
/// duration, one frame at a time.
///
/// Holds at most one [`TransitionTask`]. Starting a new transition while
/// one is running replaces it, and the new task starts from wherever the
/// camera is at that instant.
#[derive(Debug, Clone)]
pub struct TransitionAnimator {
    duration: Duration,
    easing: EasingFunction,
    active: Option<TransitionTask>,
}

impl TransitionAnimator {
    /// Animator with the given per-transition duration and curve.
    #[must_use]
    pub fn new(duration: Duration, easing: EasingFunction) -> Self {
        Self {
            duration,
            easing,
            active: None,
        }
    }

    /// Change duration and easing for future transitions.
    pub fn configure(&mut self, duration: Duration, easing: EasingFunction) {
        self.duration = duration;
        self.easing = easing;
    }

    /// The running task, if any.
    #[must_use]
    pub fn active(&self) -> Option<&TransitionTask> {
        self.active.as_ref()
    }

    /// Whether a transition is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Scale both ends of the running task about the origin, keeping its
    /// timing. Used when the canonical sphere changes size mid-flight.
    pub(crate) fn rescale(&mut self, factor: f32) {
        if let Some(task) = self.active.as_mut() {
            task.start_position *= factor;
            task.target_position *= factor;
        }
    }

    /// Begin moving `camera` toward `target`.
    ///
    /// Returns `false` without touching the running task when the camera is
    /// already exactly at `target`.
    pub fn start_transition<C>(
        &mut self,
        camera: &C,
        target: Vec3,
        now: Instant,
    ) -> bool
    where
        C: CameraHandle + ?Sized,
    {
        let start = camera.position();
        if start == target {
            return false;
        }
        if self.active.take().is_some() {
            log::debug!("transition superseded at {start}");
        }

        self.active = Some(TransitionTask {
            start_position: start,
            target_position: target,
            start_time: now,
            duration: self.duration,
            easing: self.easing,
        });
        true
    }

    /// Advance the running task and write the new position to `camera`.
    ///
    /// Returns `true` while another frame is needed.
    pub fn tick<C>(&mut self, camera: &mut C, now: Instant) -> bool
    where
        C: CameraHandle + ?Sized,
    {
        let Some(task) = self.active else {
            return false;
        };

        camera.set_position(task.position_at(now));
        if task.is_complete(now) {
            self.active = None;
            return false;
        }
        true
    }
}

impl Default for TransitionAnimator {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000), EasingFunction::Linear)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::SQRT_2;

    use super::*;
    use crate::camera::OrbitView;

    fn camera_at(position: Vec3) -> OrbitView {
        OrbitView::new(position, Vec3::ZERO)
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn midpoint_and_exact_end() {
        let start = Instant::now();
        let target = Vec3::new(5.0 / SQRT_2, 5.0 / SQRT_2, 0.0);
        let mut camera = camera_at(Vec3::new(0.0, 5.0, 0.0));
        let mut animator = TransitionAnimator::default();

        assert!(animator.start_transition(&camera, target, start));
        assert!(animator.tick(&mut camera, start + ms(500)));
        let midpoint = (Vec3::new(0.0, 5.0, 0.0) + target) * 0.5;
        assert!(camera.position.abs_diff_eq(midpoint, 1e-6));

        assert!(!animator.tick(&mut camera, start + ms(1000)));
        assert_eq!(camera.position, target);
        assert!(!animator.is_animating());
    }

    #[test]
    fn late_frames_snap_to_target() {
        let start = Instant::now();
        let target = Vec3::new(0.0, 0.0, -5.0);
        let mut camera = camera_at(Vec3::new(5.0, 0.0, 0.0));
        let mut animator = TransitionAnimator::default();

        assert!(animator.start_transition(&camera, target, start));
        assert!(!animator.tick(&mut camera, start + ms(4000)));
        assert_eq!(camera.position, target);
    }

    #[test]
    fn starting_at_target_is_a_no_op() {
        let start = Instant::now();
        let here = Vec3::new(0.0, 5.0, 0.0);
        let mut camera = camera_at(here);
        let mut animator = TransitionAnimator::default();

        assert!(!animator.start_transition(&camera, here, start));
        assert!(!animator.is_animating());
        assert!(!animator.tick(&mut camera, start + ms(100)));
        assert_eq!(camera.position, here);
    }

    #[test]
    fn newer_request_supersedes_without_a_jump() {
        let start = Instant::now();
        let corner_a = Vec3::splat(5.0 / 3.0_f32.sqrt());
        let corner_b = Vec3::new(-1.0, -1.0, 1.0) * (5.0 / 3.0_f32.sqrt());
        let mut camera = camera_at(Vec3::new(0.0, 0.0, 5.0));
        let mut animator = TransitionAnimator::default();

        assert!(animator.start_transition(&camera, corner_a, start));
        assert!(animator.tick(&mut camera, start + ms(200)));
        let at_switch = camera.position;

        let switch = start + ms(200);
        assert!(animator.start_transition(&camera, corner_b, switch));
        let task = animator.active().copied();
        assert_eq!(task.map(|t| t.start_position), Some(at_switch));
        assert_eq!(task.map(|t| t.target_position), Some(corner_b));

        assert!(animator.tick(&mut camera, switch));
        assert_eq!(camera.position, at_switch);

        assert!(!animator.tick(&mut camera, switch + ms(1000)));
        assert_eq!(camera.position, corner_b);
    }

    #[test]
    fn request_for_current_position_keeps_running_task() {
        let start = Instant::now();
        let target = Vec3::X * 5.0;
        let mut camera = camera_at(Vec3::new(0.0, 5.0, 0.0));
        let mut animator = TransitionAnimator::default();
        assert!(animator.start_transition(&camera, target, start));
        assert!(animator.tick(&mut camera, start + ms(300)));

        let here = camera.position;
        assert!(!animator.start_transition(&camera, here, start + ms(300)));
        assert_eq!(animator.active().map(|t| t.target_position), Some(target));

        assert!(!animator.tick(&mut camera, start + ms(1000)));
        assert_eq!(camera.position, target);
    }

    #[test]
    fn rescale_moves_both_ends_and_keeps_timing() {
        let start = Instant::now();
        let mut camera = camera_at(Vec3::new(0.0, 5.0, 0.0));
        let mut animator = TransitionAnimator::default();
        assert!(animator.start_transition(&camera, Vec3::X * 5.0, start));

        animator.rescale(2.0);
        let task = animator.active().copied();
        assert_eq!(task.map(|t| t.start_position), Some(Vec3::Y * 10.0));
        assert_eq!(task.map(|t| t.target_position), Some(Vec3::X * 10.0));
        assert_eq!(task.map(|t| t.start_time), Some(start));

        assert!(!animator.tick(&mut camera, start + ms(1000)));
        assert_eq!(camera.position, Vec3::X * 10.0);
    }
}
