//! Camera state for the two linked viewports.
//!
//! Provides the target-relative [`OrbitView`], the [`CameraHandle`] trait a
//! host renderer implements for its own cameras, and an [`OrbitController`]
//! that turns drag/pan/zoom input into camera moves.

/// Orbit controller turning pointer input into camera moves.
pub mod controller;
/// Renderer-facing camera access trait.
pub mod handle;
/// Spherical position/target view type.
pub mod orbit;

pub use controller::OrbitController;
pub use handle::CameraHandle;
pub use orbit::{OrbitView, Spherical};
