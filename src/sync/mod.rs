//! Bidirectional camera sync between the primary viewport and the
//! orientation cube.
//!
//! Each direction is a [`CameraLink`] gated by its origin viewport's
//! [`ChangeThrottle`]. Links copy viewing direction only; each viewport
//! keeps its own zoom and pivot.

/// Directed link that copies viewing direction.
pub mod link;
/// Rate limiting of change notifications.
pub mod throttle;

pub use link::{aligned_position, CameraLink, SyncOutcome, ViewportRole};
pub use throttle::ChangeThrottle;
