//! Options methods for `ViewCubeEngine`.

use glam::Vec3;

use super::ViewCubeEngine;
use crate::camera::CameraHandle;
use crate::options::Options;
use crate::orientation::OrientationTable;
use crate::sync::ViewportRole;

impl ViewCubeEngine {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace options and apply all changes to subsystems.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.apply_options();
    }

    /// Push current option values to the table, both controllers, both
    /// throttles and the animator.
    pub fn apply_options(&mut self) {
        self.apply_radius();
        self.apply_camera();

        let frequency = self.options.sync.frequency_ms;
        self.primary.set_frequency(frequency);
        self.cube.set_frequency(frequency);

        self.animator.configure(
            self.options.transition.duration(),
            self.options.transition.easing,
        );
    }

    /// Rebuild the canonical table and put the cube camera back on the
    /// sphere when the radius changed. A running transition is scaled onto
    /// the new sphere and keeps going.
    fn apply_radius(&mut self) {
        let radius = self.options.cube.radius;
        let previous = self.table.radius();
        if (previous - radius).abs() <= f32::EPSILON {
            return;
        }
        self.table = OrientationTable::new(radius);
        if previous > 0.0 {
            self.animator.rescale(radius / previous);
        }

        if let Some(cube) = self.cube.controller_mut() {
            let view = cube.view();
            let direction = view.offset().normalize_or(Vec3::Z);
            cube.set_position(view.target + direction * radius);
        }
        log::debug!("{} radius now {radius}", ViewportRole::OrientationCube);
    }

    /// Push camera options to both controllers.
    fn apply_camera(&mut self) {
        let camera = &self.options.camera;
        if let Some(primary) = self.primary.controller_mut() {
            primary.apply_options(camera);
        }
        if let Some(cube) = self.cube.controller_mut() {
            cube.apply_cube_options(camera);
        }
    }
}
