//! Per-viewport context: the camera controller and its sync throttle.

use crate::camera::OrbitController;
use crate::error::CubeError;
use crate::sync::{ChangeThrottle, ViewportRole};

/// Everything the engine keeps for one side of the link.
///
/// A link only runs when both contexts hold a controller.
#[derive(Debug, Clone)]
pub struct Viewport {
    role: ViewportRole,
    controller: Option<OrbitController>,
    throttle: ChangeThrottle,
}

impl Viewport {
    /// Context for `role` with an optional controller and a throttle
    /// window of `frequency_ms`.
    #[must_use]
    pub fn new(
        role: ViewportRole,
        controller: Option<OrbitController>,
        frequency_ms: i64,
    ) -> Self {
        Self {
            role,
            controller,
            throttle: ChangeThrottle::new(frequency_ms),
        }
    }

    /// Which viewport this is.
    #[must_use]
    pub fn role(&self) -> ViewportRole {
        self.role
    }

    /// The attached controller, if any.
    #[must_use]
    pub fn controller(&self) -> Option<&OrbitController> {
        self.controller.as_ref()
    }

    /// Mutable access to the attached controller.
    pub fn controller_mut(&mut self) -> Option<&mut OrbitController> {
        self.controller.as_mut()
    }

    /// The attached controller.
    ///
    /// # Errors
    ///
    /// [`CubeError::MissingController`] when none is attached.
    pub fn require_controller(&self) -> Result<&OrbitController, CubeError> {
        self.controller
            .as_ref()
            .ok_or(CubeError::MissingController(self.role))
    }

    /// Attach (or replace) the controller.
    pub fn attach(&mut self, controller: OrbitController) {
        self.controller = Some(controller);
        self.throttle.reset();
    }

    /// Rate limiter for changes originating here.
    #[must_use]
    pub fn throttle(&self) -> &ChangeThrottle {
        &self.throttle
    }

    /// Mutable access to the rate limiter.
    pub fn throttle_mut(&mut self) -> &mut ChangeThrottle {
        &mut self.throttle
    }

    /// Rebuild the throttle for a new window length.
    pub fn set_frequency(&mut self, frequency_ms: i64) {
        self.throttle = ChangeThrottle::new(frequency_ms);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::OrbitView;
    use crate::options::CameraOptions;

    #[test]
    fn missing_controller_is_reported() {
        let viewport = Viewport::new(ViewportRole::Primary, None, 100);
        assert!(matches!(
            viewport.require_controller(),
            Err(CubeError::MissingController(ViewportRole::Primary))
        ));
    }

    #[test]
    fn attach_makes_controller_available() {
        let mut viewport = Viewport::new(ViewportRole::Primary, None, 100);
        viewport.attach(OrbitController::new(
            OrbitView::new(Vec3::Z * 10.0, Vec3::ZERO),
            &CameraOptions::default(),
        ));
        assert!(viewport.require_controller().is_ok());
        assert_eq!(viewport.role(), ViewportRole::Primary);
    }
}
