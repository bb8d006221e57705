//! Data-driven placement of the clickable panels on the cube surface.
//!
//! Each zone is drawn as one square panel per cube face it touches: faces
//! get one, edges two, corners three, 54 panels in total. The renderer
//! turns these into quads and labels; hit-testing maps a picked panel back
//! to its [`Zone`].

use glam::{Quat, Vec3};

use super::zone::{Zone, ZoneKind};

/// Which zone kinds are shown (and therefore clickable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct LayoutToggles {
    /// Show the six face-center panels.
    pub faces: bool,
    /// Show the edge panels.
    pub edges: bool,
    /// Show the corner panels.
    pub corners: bool,
}

impl LayoutToggles {
    /// Everything visible.
    pub const ALL: Self = Self {
        faces: true,
        edges: true,
        corners: true,
    };

    /// Whether panels of this kind are generated.
    #[must_use]
    pub const fn enabled(self, kind: ZoneKind) -> bool {
        match kind {
            ZoneKind::Face => self.faces,
            ZoneKind::Edge => self.edges,
            ZoneKind::Corner => self.corners,
        }
    }
}

impl Default for LayoutToggles {
    fn default() -> Self {
        Self::ALL
    }
}

/// One square panel on the cube surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZonePanel {
    /// Zone this panel selects.
    pub zone: Zone,
    /// Face / edge / corner, used to pick the style record.
    pub kind: ZoneKind,
    /// Outward unit normal of the cube face the panel lies on.
    pub normal: Vec3,
    /// Panel center in cube-local coordinates.
    pub center: Vec3,
    /// Side length of the square.
    pub size: f32,
    /// Where the zone label is anchored, just above the panel surface.
    pub label_anchor: Vec3,
}

impl ZonePanel {
    /// Rotation taking a +Z-facing unit quad onto this panel's face.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_arc(Vec3::Z, self.normal)
    }
}

/// Cube edge length for a widget of the given pixel size.
#[must_use]
pub fn cube_edge_length(width: u32, height: u32) -> f32 {
    width.min(height) as f32 / 80.0
}

/// Generate every visible panel for a cube of edge length `cube_size`.
///
/// Along the panel's own face axis the center sits at `±size/2`; along the
/// zone's other non-zero axes it is pushed out to `±size/3`, which places
/// edge and corner panels in the outer cells of the 3×3 face grid.
#[must_use]
pub fn generate(
    cube_size: f32,
    text_offset: f32,
    toggles: LayoutToggles,
) -> Vec<ZonePanel> {
    let half = cube_size / 2.0;
    let third = cube_size / 3.0;

    let mut panels = Vec::with_capacity(54);
    for zone in Zone::ALL {
        let kind = zone.kind();
        if !toggles.enabled(kind) {
            continue;
        }
        let signs = zone.sign_vector();
        for axis in 0..3 {
            if signs[axis] == 0.0 {
                continue;
            }
            let mut normal = Vec3::ZERO;
            normal[axis] = signs[axis];

            let mut center = signs * third;
            center[axis] = signs[axis] * half;

            panels.push(ZonePanel {
                zone,
                kind,
                normal,
                center,
                size: third,
                label_anchor: center + normal * text_offset,
            });
        }
    }
    panels
}
