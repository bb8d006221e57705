//! The 26 selectable directions of the orientation cube.
//!
//! Axis convention: `top` is +Y, `north` is +Z, `east` is +X.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CubeError;

/// Whether a zone sits on a face, an edge, or a corner of the cube.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    /// One non-zero axis (6 zones).
    Face,
    /// Two non-zero axes (12 zones).
    Edge,
    /// Three non-zero axes (8 zones).
    Corner,
}

/// One of the 26 clickable regions of the orientation cube.
///
/// Immutable lookup key; the canonical camera position for each zone lives
/// in [`OrientationTable`](super::OrientationTable).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum Zone {
    Top,
    Bottom,
    North,
    South,
    East,
    West,

    TopNorth,
    TopSouth,
    TopEast,
    TopWest,
    BottomNorth,
    BottomSouth,
    BottomEast,
    BottomWest,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,

    TopNorthEast,
    TopNorthWest,
    TopSouthEast,
    TopSouthWest,
    BottomNorthEast,
    BottomNorthWest,
    BottomSouthEast,
    BottomSouthWest,
}

impl Zone {
    /// Every zone, faces first, then edges, then corners.
    pub const ALL: [Zone; 26] = [
        Zone::Top,
        Zone::Bottom,
        Zone::North,
        Zone::South,
        Zone::East,
        Zone::West,
        Zone::TopNorth,
        Zone::TopSouth,
        Zone::TopEast,
        Zone::TopWest,
        Zone::BottomNorth,
        Zone::BottomSouth,
        Zone::BottomEast,
        Zone::BottomWest,
        Zone::NorthEast,
        Zone::NorthWest,
        Zone::SouthEast,
        Zone::SouthWest,
        Zone::TopNorthEast,
        Zone::TopNorthWest,
        Zone::TopSouthEast,
        Zone::TopSouthWest,
        Zone::BottomNorthEast,
        Zone::BottomNorthWest,
        Zone::BottomSouthEast,
        Zone::BottomSouthWest,
    ];

    /// Per-axis sign (`x`, `y`, `z`) of the zone's outward direction.
    #[must_use]
    pub const fn signs(self) -> [i8; 3] {
        match self {
            Self::Top => [0, 1, 0],
            Self::Bottom => [0, -1, 0],
            Self::North => [0, 0, 1],
            Self::South => [0, 0, -1],
            Self::East => [1, 0, 0],
            Self::West => [-1, 0, 0],

            Self::TopNorth => [0, 1, 1],
            Self::TopSouth => [0, 1, -1],
            Self::TopEast => [1, 1, 0],
            Self::TopWest => [-1, 1, 0],
            Self::BottomNorth => [0, -1, 1],
            Self::BottomSouth => [0, -1, -1],
            Self::BottomEast => [1, -1, 0],
            Self::BottomWest => [-1, -1, 0],
            Self::NorthEast => [1, 0, 1],
            Self::NorthWest => [-1, 0, 1],
            Self::SouthEast => [1, 0, -1],
            Self::SouthWest => [-1, 0, -1],

            Self::TopNorthEast => [1, 1, 1],
            Self::TopNorthWest => [-1, 1, 1],
            Self::TopSouthEast => [1, 1, -1],
            Self::TopSouthWest => [-1, 1, -1],
            Self::BottomNorthEast => [1, -1, 1],
            Self::BottomNorthWest => [-1, -1, 1],
            Self::BottomSouthEast => [1, -1, -1],
            Self::BottomSouthWest => [-1, -1, -1],
        }
    }

    /// Unnormalized sign vector, e.g. `(1, 1, 0)` for [`Zone::TopEast`].
    #[must_use]
    pub fn sign_vector(self) -> Vec3 {
        let [x, y, z] = self.signs();
        Vec3::new(f32::from(x), f32::from(y), f32::from(z))
    }

    /// Number of non-zero axes decides the kind.
    #[must_use]
    pub fn kind(self) -> ZoneKind {
        match self.signs().iter().filter(|s| **s != 0).count() {
            1 => ZoneKind::Face,
            2 => ZoneKind::Edge,
            _ => ZoneKind::Corner,
        }
    }

    /// Canonical camelCase identifier (`"topNorthEast"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::TopNorth => "topNorth",
            Self::TopSouth => "topSouth",
            Self::TopEast => "topEast",
            Self::TopWest => "topWest",
            Self::BottomNorth => "bottomNorth",
            Self::BottomSouth => "bottomSouth",
            Self::BottomEast => "bottomEast",
            Self::BottomWest => "bottomWest",
            Self::NorthEast => "northEast",
            Self::NorthWest => "northWest",
            Self::SouthEast => "southEast",
            Self::SouthWest => "southWest",
            Self::TopNorthEast => "topNorthEast",
            Self::TopNorthWest => "topNorthWest",
            Self::TopSouthEast => "topSouthEast",
            Self::TopSouthWest => "topSouthWest",
            Self::BottomNorthEast => "bottomNorthEast",
            Self::BottomNorthWest => "bottomNorthWest",
            Self::BottomSouthEast => "bottomSouthEast",
            Self::BottomSouthWest => "bottomSouthWest",
        }
    }

    /// Default on-cube label: the full word for faces, initials for edges
    /// and corners (`"TN"`, `"NE"`, `"BSW"`).
    #[must_use]
    pub fn default_label(self) -> String {
        if self.kind() == ZoneKind::Face {
            return self.name().to_owned();
        }
        self.name()
            .char_indices()
            .filter(|(i, c)| *i == 0 || c.is_ascii_uppercase())
            .map(|(_, c)| c.to_ascii_uppercase())
            .collect()
    }

    /// Parse a zone name. Accepts camelCase (`topNorthEast`), snake_case
    /// (`top_north_east`) and kebab-case, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|zone| zone.name().eq_ignore_ascii_case(&wanted))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Zone {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CubeError::UnknownZone(s.to_owned()))
    }
}
