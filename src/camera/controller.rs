//! Orbit control for a single viewport.

use glam::{Vec2, Vec3};

use super::handle::CameraHandle;
use super::orbit::{OrbitView, Spherical};
use crate::options::CameraOptions;

const ROTATE_RADIANS_PER_PIXEL: f32 = 0.01;
const PAN_FRACTION_PER_PIXEL: f32 = 0.002;
const POLE_MARGIN: f32 = 1e-3;

/// Orbit control for one viewport: drag to rotate, shift-drag to pan,
/// scroll to zoom.
///
/// Every interaction method returns `true` when it actually moved the
/// camera. That return value is the viewport's "view changed"
/// notification; writes made through [`CameraHandle`] never produce one.
#[derive(Debug, Clone)]
pub struct OrbitController {
    view: OrbitView,

    rotate_enabled: bool,
    pan_enabled: bool,
    zoom_enabled: bool,

    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
}

impl OrbitController {
    /// Controller for a primary scene viewport, all interactions enabled.
    #[must_use]
    pub fn new(view: OrbitView, options: &CameraOptions) -> Self {
        Self {
            view,
            rotate_enabled: true,
            pan_enabled: true,
            zoom_enabled: true,
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
        }
    }

    /// Controller for the orientation cube: sits on the canonical sphere
    /// looking at the origin from the north. Rotation starts disabled and
    /// is only switched on while the cube is grabbed; pan and zoom follow
    /// the `cube_pan` / `cube_zoom` flags.
    #[must_use]
    pub fn orientation_cube(radius: f32, options: &CameraOptions) -> Self {
        let mut controller = Self {
            view: OrbitView::new(Vec3::Z * radius, Vec3::ZERO),
            rotate_enabled: false,
            pan_enabled: false,
            zoom_enabled: false,
            rotate_speed: 0.0,
            pan_speed: 0.0,
            zoom_speed: 0.0,
            min_distance: radius,
            max_distance: radius,
        };
        controller.apply_cube_options(options);
        controller
    }

    /// Current position/target snapshot.
    #[must_use]
    pub fn view(&self) -> OrbitView {
        self.view
    }

    /// Refresh speeds and distance limits after an options change.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.rotate_speed = options.rotate_speed;
        self.pan_speed = options.pan_speed;
        self.zoom_speed = options.zoom_speed;
        self.min_distance = options.min_distance;
        self.max_distance = options.max_distance;
    }

    /// Cube-side counterpart of [`apply_options`](Self::apply_options).
    /// Distance limits stay pinned to the current radius unless zoom is
    /// allowed.
    pub fn apply_cube_options(&mut self, options: &CameraOptions) {
        self.rotate_speed = options.cube_rotate_speed;
        self.pan_speed = options.pan_speed;
        self.zoom_speed = options.zoom_speed;
        self.pan_enabled = options.cube_pan;
        self.zoom_enabled = options.cube_zoom;
        if options.cube_zoom {
            self.min_distance = options.min_distance;
            self.max_distance = options.max_distance;
        } else {
            let radius = self.view.distance();
            self.min_distance = radius;
            self.max_distance = radius;
        }
    }

    /// Whether drag-rotation is currently accepted.
    #[must_use]
    pub fn rotate_enabled(&self) -> bool {
        self.rotate_enabled
    }

    /// Enable or disable drag-rotation.
    pub fn set_rotate_enabled(&mut self, enabled: bool) {
        self.rotate_enabled = enabled;
    }

    /// Orbit around the target by `delta` pixels of drag.
    pub fn rotate(&mut self, delta: Vec2) -> bool {
        if !self.rotate_enabled || delta == Vec2::ZERO {
            return false;
        }
        let Some(coords) = self.view.spherical() else {
            return false;
        };

        let step = ROTATE_RADIANS_PER_PIXEL * self.rotate_speed;
        let coords = Spherical {
            azimuth: coords.azimuth + delta.x * step,
            polar: coords.polar - delta.y * step,
            ..coords
        }
        .with_polar_clamped(POLE_MARGIN);

        self.view.position = self.view.position_at(coords);
        true
    }

    /// Slide position and target together in the view plane.
    pub fn pan(&mut self, delta: Vec2) -> bool {
        if !self.pan_enabled || delta == Vec2::ZERO || self.view.is_degenerate()
        {
            return false;
        }

        let offset = self.view.offset();
        let forward = -offset.normalize();
        let right = forward.cross(Vec3::Y).normalize_or(Vec3::X);
        let up = right.cross(forward);

        let scale = PAN_FRACTION_PER_PIXEL * self.pan_speed * offset.length();
        let translation = right * (-delta.x * scale) + up * (delta.y * scale);

        self.view.position += translation;
        self.view.target += translation;
        true
    }

    /// Move toward (positive) or away from (negative) the target.
    pub fn zoom(&mut self, delta: f32) -> bool {
        if !self.zoom_enabled || delta == 0.0 {
            return false;
        }
        let Some(coords) = self.view.spherical() else {
            return false;
        };

        let distance = (coords.distance * (1.0 - delta * self.zoom_speed))
            .clamp(self.min_distance, self.max_distance);
        if distance == coords.distance {
            return false;
        }

        let offset = self.view.offset() * (distance / coords.distance);
        self.view.position = self.view.target + offset;
        true
    }
}

impl CameraHandle for OrbitController {
    fn position(&self) -> Vec3 {
        self.view.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.view.position = position;
    }

    fn target(&self) -> Vec3 {
        self.view.target
    }

    fn set_target(&mut self, target: Vec3) {
        self.view.target = target;
    }

    fn view(&self) -> OrbitView {
        self.view
    }
}
