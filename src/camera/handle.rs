//! The camera interface the host renderer exposes.

use glam::Vec3;

use super::orbit::OrbitView;

/// Read/write access to a renderer-owned camera.
///
/// Sync and transition code only ever touch cameras through this trait,
/// so a host can plug in its own scene-graph camera. Writes through
/// [`set_position`](Self::set_position) are *not* user interaction and must
/// not raise the host's "view changed" notification, otherwise two linked
/// viewports would keep re-triggering each other.
pub trait CameraHandle {
    /// Current camera position.
    fn position(&self) -> Vec3;
    /// Move the camera without touching its target.
    fn set_position(&mut self, position: Vec3);
    /// Current orbit pivot.
    fn target(&self) -> Vec3;
    /// Move the orbit pivot without touching the camera position.
    fn set_target(&mut self, target: Vec3);

    /// Snapshot of position and target.
    fn view(&self) -> OrbitView {
        OrbitView::new(self.position(), self.target())
    }
}

impl CameraHandle for OrbitView {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn target(&self) -> Vec3 {
        self.target
    }

    fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    fn view(&self) -> OrbitView {
        *self
    }
}
