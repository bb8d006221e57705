use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::orientation::layout::{cube_edge_length, LayoutToggles};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Cube", inline)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
/// Orientation cube geometry and which zone kinds are clickable.
pub struct CubeOptions {
    /// Radius of the canonical camera sphere.
    #[schemars(title = "Camera Radius", range(min = 1.0, max = 50.0), extend("step" = 0.5))]
    pub radius: f32,
    /// Widget width in pixels.
    #[schemars(skip)]
    pub widget_width: u32,
    /// Widget height in pixels.
    #[schemars(skip)]
    pub widget_height: u32,
    /// Show and accept the six face panels.
    #[schemars(title = "Face Zones")]
    pub face_nodes: bool,
    /// Show and accept the edge panels.
    #[schemars(title = "Edge Zones")]
    pub edge_nodes: bool,
    /// Show and accept the corner panels.
    #[schemars(title = "Corner Zones")]
    pub corner_nodes: bool,
}

impl CubeOptions {
    /// Edge length of the drawn cube for the configured widget size.
    #[must_use]
    pub fn cube_size(&self) -> f32 {
        cube_edge_length(self.widget_width, self.widget_height)
    }

    /// Zone kinds enabled by the node flags.
    #[must_use]
    pub fn toggles(&self) -> LayoutToggles {
        LayoutToggles {
            faces: self.face_nodes,
            edges: self.edge_nodes,
            corners: self.corner_nodes,
        }
    }
}

impl Default for CubeOptions {
    fn default() -> Self {
        Self {
            radius: 5.0,
            widget_width: 200,
            widget_height: 200,
            face_nodes: true,
            edge_nodes: true,
            corner_nodes: true,
        }
    }
}
