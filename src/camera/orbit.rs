//! Target-relative spherical view of a camera.

use std::f32::consts::PI;

use glam::Vec3;

/// Distance below which position and target are treated as coincident.
pub const DEGENERATE_DISTANCE: f32 = 1e-6;

/// A camera's orbiting state: where it is and what it pivots around.
///
/// Distance, azimuth and polar angle are derived from the two points on
/// every call, never cached, so they always reflect the live camera.
///
/// Angles follow the same convention the sync formula writes with:
/// azimuth is measured in the horizontal (XZ) plane from +X toward +Z,
/// polar angle from the +Y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitView {
    /// Camera position in world space.
    pub position: Vec3,
    /// Look-at / orbit pivot.
    pub target: Vec3,
}

/// Spherical coordinates of a position relative to its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Distance from target to position.
    pub distance: f32,
    /// Angle in the horizontal plane, radians in `(-π, π]`.
    pub azimuth: f32,
    /// Angle from the vertical axis, radians in `[0, π]`.
    pub polar: f32,
}

impl Spherical {
    /// Cartesian offset from the target for these coordinates.
    #[must_use]
    pub fn to_offset(self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        Vec3::new(
            self.distance * cos_azimuth * sin_polar,
            self.distance * cos_polar,
            self.distance * sin_azimuth * sin_polar,
        )
    }

    /// Keep the polar angle strictly inside `(0, π)` so the view never
    /// flips over a pole while orbiting.
    #[must_use]
    pub fn with_polar_clamped(mut self, margin: f32) -> Self {
        self.polar = self.polar.clamp(margin, PI - margin);
        self
    }
}

impl OrbitView {
    /// View from explicit position and target.
    #[must_use]
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Position minus target.
    #[must_use]
    pub fn offset(&self) -> Vec3 {
        self.position - self.target
    }

    /// `|position − target|`.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.offset().length()
    }

    /// Whether angles are undefined (zero distance or non-finite input).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let distance = self.distance();
        !distance.is_finite() || distance <= DEGENERATE_DISTANCE
    }

    /// Azimuthal angle of the offset projected onto the XZ plane.
    ///
    /// Returns 0 when the camera is directly above or below the target.
    #[must_use]
    pub fn azimuthal_angle(&self) -> f32 {
        let offset = self.offset();
        offset.z.atan2(offset.x)
    }

    /// Angle between the offset and the +Y axis.
    #[must_use]
    pub fn polar_angle(&self) -> f32 {
        let distance = self.distance();
        if distance <= DEGENERATE_DISTANCE {
            return 0.0;
        }
        (self.offset().y / distance).clamp(-1.0, 1.0).acos()
    }

    /// All three spherical coordinates, or `None` when degenerate.
    #[must_use]
    pub fn spherical(&self) -> Option<Spherical> {
        if self.is_degenerate() {
            return None;
        }
        Some(Spherical {
            distance: self.distance(),
            azimuth: self.azimuthal_angle(),
            polar: self.polar_angle(),
        })
    }

    /// Position at `coords` around this view's target.
    #[must_use]
    pub fn position_at(&self, coords: Spherical) -> Vec3 {
        self.target + coords.to_offset()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn distance_is_relative_to_target() {
        let view = OrbitView::new(
            Vec3::new(4.0, 3.0, 10.0),
            Vec3::new(1.0, -1.0, 10.0),
        );
        assert!((view.distance() - 5.0).abs() < EPS);
    }

    #[test]
    fn angles_on_the_axes() {
        let east = OrbitView::new(Vec3::X * 5.0, Vec3::ZERO);
        assert!(east.azimuthal_angle().abs() < EPS);
        assert!((east.polar_angle() - FRAC_PI_2).abs() < EPS);

        let north = OrbitView::new(Vec3::Z * 5.0, Vec3::ZERO);
        assert!((north.azimuthal_angle() - FRAC_PI_2).abs() < EPS);

        let top = OrbitView::new(Vec3::Y * 5.0, Vec3::ZERO);
        assert!(top.polar_angle().abs() < EPS);
        assert!(top.azimuthal_angle().abs() < EPS);

        let bottom = OrbitView::new(Vec3::NEG_Y * 5.0, Vec3::ZERO);
        assert!((bottom.polar_angle() - PI).abs() < EPS);
    }

    #[test]
    fn angles_are_recomputed_after_moves() {
        let mut view = OrbitView::new(Vec3::X * 5.0, Vec3::ZERO);
        assert!(view.azimuthal_angle().abs() < EPS);
        view.position = Vec3::new(0.0, 0.0, 5.0);
        assert!((view.azimuthal_angle() - FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn spherical_round_trips_through_offset() {
        let target = Vec3::new(2.0, -3.0, 7.0);
        let coords = Spherical {
            distance: 12.0,
            azimuth: -2.1,
            polar: FRAC_PI_4,
        };
        let view = OrbitView::new(target + coords.to_offset(), target);
        let back = view.spherical();
        assert!(back.is_some_and(|s| {
            (s.distance - 12.0).abs() < EPS
                && (s.azimuth + 2.1).abs() < EPS
                && (s.polar - FRAC_PI_4).abs() < EPS
        }));
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let view = OrbitView::new(p, p);
        assert!(view.is_degenerate());
        assert!(view.spherical().is_none());
        assert_eq!(view.polar_angle(), 0.0);
    }

    #[test]
    fn non_finite_points_are_degenerate() {
        let view = OrbitView::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ZERO);
        assert!(view.is_degenerate());
    }

    #[test]
    fn polar_clamp_keeps_off_the_poles() {
        let coords = Spherical {
            distance: 1.0,
            azimuth: 0.0,
            polar: -0.3,
        }
        .with_polar_clamped(0.01);
        assert!((coords.polar - 0.01).abs() < EPS);
    }
}
