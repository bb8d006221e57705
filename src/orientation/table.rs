//! Zone → canonical camera position lookup.

use std::f32::consts::SQRT_2;

use glam::Vec3;
use rustc_hash::FxHashMap;

use super::zone::{Zone, ZoneKind};

/// Static mapping from each [`Zone`] to a camera position on a sphere of
/// radius `R` around the origin.
///
/// Faces sit on the axes at `R`, edges at `R/√2` on their two axes, corners
/// at `R/√3` on all three. Every entry is therefore exactly `R` from the
/// origin, so jumping between zones changes orientation but never zoom.
#[derive(Debug, Clone)]
pub struct OrientationTable {
    radius: f32,
    positions: FxHashMap<Zone, Vec3>,
}

impl OrientationTable {
    /// Radius used when none is configured.
    pub const DEFAULT_RADIUS: f32 = 5.0;

    /// Build the table for a sphere of the given radius.
    #[must_use]
    pub fn new(radius: f32) -> Self {
        let edge = radius / SQRT_2;
        let corner = radius / 3.0_f32.sqrt();
        let positions = Zone::ALL
            .into_iter()
            .map(|zone| {
                let scale = match zone.kind() {
                    ZoneKind::Face => radius,
                    ZoneKind::Edge => edge,
                    ZoneKind::Corner => corner,
                };
                (zone, zone.sign_vector() * scale)
            })
            .collect();
        Self { radius, positions }
    }

    /// Sphere radius this table was built for.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Canonical position for a zone.
    #[must_use]
    pub fn position(&self, zone: Zone) -> Vec3 {
        self.positions.get(&zone).copied().unwrap_or(Vec3::ZERO)
    }

    /// Look up a zone by its identifier string.
    ///
    /// Unrecognized names return `None`; callers treat that as "no
    /// navigation action", not as an error.
    #[must_use]
    pub fn lookup_name(&self, name: &str) -> Option<Vec3> {
        let Some(zone) = Zone::from_name(name) else {
            log::warn!("no canonical position for zone {name:?}");
            return None;
        };
        Some(self.position(zone))
    }

    /// All `(zone, position)` pairs in [`Zone::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Zone, Vec3)> + '_ {
        Zone::ALL
            .into_iter()
            .map(move |zone| (zone, self.position(zone)))
    }
}

impl Default for OrientationTable {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RADIUS)
    }
}
