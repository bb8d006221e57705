//! Directed camera link: copy one viewport's viewing direction onto the
//! other without touching the other's zoom or pivot.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{CameraHandle, Spherical};

/// Which of the two viewports a change came from (or is aimed at).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewportRole {
    /// The scene viewport the user is actually navigating.
    Primary,
    /// The small orientation-cube overlay.
    OrientationCube,
}

impl ViewportRole {
    /// The viewport on the other end of a link.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Primary => Self::OrientationCube,
            Self::OrientationCube => Self::Primary,
        }
    }
}

impl fmt::Display for ViewportRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Primary => "primary",
            Self::OrientationCube => "orientation cube",
        })
    }
}

/// What a single link application did to the aim camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SyncOutcome {
    /// The aim camera was moved to this position.
    Applied(Vec3),
    /// The aim camera already looked along the origin's direction.
    Unchanged,
    /// Origin or aim had coincident position and target; nothing written.
    Degenerate,
}

impl SyncOutcome {
    /// Whether the aim camera was written to.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Relative tolerance below which the aim is considered already in sync.
const SETTLED_TOLERANCE: f32 = 1e-5;

/// One direction of the bidirectional sync relationship.
///
/// Reads the origin's azimuth and polar angle, keeps the aim's own
/// distance and target, and writes only the aim's position. It never
/// writes back to the origin, and the write does not count as user
/// interaction on the aim side, so no further sync is triggered by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraLink {
    origin: ViewportRole,
}

impl CameraLink {
    /// Link whose changes flow out of `origin`.
    #[must_use]
    pub const fn from_origin(origin: ViewportRole) -> Self {
        Self { origin }
    }

    /// The viewport this link reads from.
    #[must_use]
    pub const fn origin(self) -> ViewportRole {
        self.origin
    }

    /// The viewport this link writes to.
    #[must_use]
    pub const fn aim(self) -> ViewportRole {
        self.origin.other()
    }

    /// Reposition `aim` to look from the same direction as `origin`.
    pub fn apply<O, A>(self, origin: &O, aim: &mut A) -> SyncOutcome
    where
        O: CameraHandle + ?Sized,
        A: CameraHandle + ?Sized,
    {
        let aim_view = aim.view();
        let Some(next) = aligned_position(origin, &*aim) else {
            log::debug!(
                "{} -> {} sync skipped: degenerate view",
                self.origin,
                self.aim()
            );
            return SyncOutcome::Degenerate;
        };

        let tolerance = SETTLED_TOLERANCE * aim_view.distance().max(1.0);
        if next.abs_diff_eq(aim_view.position, tolerance) {
            return SyncOutcome::Unchanged;
        }

        aim.set_position(next);
        SyncOutcome::Applied(next)
    }
}

/// Where `aim` would sit if it looked from `origin`'s direction at its own
/// distance around its own target. `None` if either view is degenerate.
#[must_use]
pub fn aligned_position<O, A>(origin: &O, aim: &A) -> Option<Vec3>
where
    O: CameraHandle + ?Sized,
    A: CameraHandle + ?Sized,
{
    let direction = origin.view().spherical()?;
    let aim_view = aim.view();
    let own = aim_view.spherical()?;

    let next = aim_view.position_at(Spherical {
        distance: own.distance,
        ..direction
    });
    next.is_finite().then_some(next)
}
