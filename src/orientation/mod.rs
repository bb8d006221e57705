//! Orientation-cube zones and their canonical camera positions.
//!
//! A [`Zone`] is one of 26 symbolic directions. The [`OrientationTable`]
//! maps each to a point on a sphere of fixed radius, and [`layout`]
//! generates the clickable panels a renderer draws for them.

/// Data-driven panel placement for the 26 zones.
pub mod layout;
/// Zone → canonical position lookup.
pub mod table;
/// Zone identifiers and kinds.
pub mod zone;

pub use layout::{LayoutToggles, ZonePanel};
pub use table::OrientationTable;
pub use zone::{Zone, ZoneKind};
