use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit control parameters for both viewports.
pub struct CameraOptions {
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Closest the primary camera may get to its target.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest the primary camera may get from its target.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Rotation sensitivity while dragging the cube itself.
    #[schemars(title = "Cube Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub cube_rotate_speed: f32,
    /// Allow panning the cube camera.
    #[schemars(skip)]
    pub cube_pan: bool,
    /// Allow zooming the cube camera.
    #[schemars(skip)]
    pub cube_zoom: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 0.5,
            pan_speed: 0.5,
            zoom_speed: 0.1,
            min_distance: 1.0,
            max_distance: 1000.0,
            cube_rotate_speed: 0.3,
            cube_pan: false,
            cube_zoom: false,
        }
    }
}
