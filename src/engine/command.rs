//! The engine's complete interactive vocabulary.
//!
//! Every operation on the two linked viewports, whether it came from a
//! pointer gesture, a host toolbar or a script, is a `CubeCommand` passed
//! to [`ViewCubeEngine::execute`](super::ViewCubeEngine::execute).

use glam::Vec2;

use crate::orientation::Zone;
use crate::sync::ViewportRole;

/// A discrete or parameterized operation the engine can perform.
///
/// ```ignore
/// engine.execute(CubeCommand::SelectZone { zone: Zone::TopNorthEast }, now);
/// engine.execute(
///     CubeCommand::Zoom { viewport: ViewportRole::Primary, delta: 1.0 },
///     now,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CubeCommand {
    /// Orbit a viewport's camera by `delta` pixels of drag.
    Rotate {
        /// Which camera to move.
        viewport: ViewportRole,
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan a viewport's camera by `delta` pixels of drag.
    Pan {
        /// Which camera to move.
        viewport: ViewportRole,
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom a viewport's camera (positive = in, negative = out).
    Zoom {
        /// Which camera to move.
        viewport: ViewportRole,
        /// Scroll amount.
        delta: f32,
    },

    /// Allow or forbid drag-rotation of the cube camera.
    SetCubeRotation {
        /// `true` while the cube is grabbed.
        enabled: bool,
    },

    /// Animate to a zone's canonical orientation.
    SelectZone {
        /// The zone that was picked.
        zone: Zone,
    },

    /// Move the primary camera's orbit pivot back to the world origin.
    ResetTarget,
}
