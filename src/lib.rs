// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orientation cube engine: a small navigation viewport whose camera stays
//! pointed the same way as a primary 3D viewport.
//!
//! The cube shows 26 clickable zones (6 faces, 12 edges, 8 corners). Dragging
//! either viewport turns the other one to the same viewing direction while
//! each keeps its own zoom and pivot; double-clicking a zone animates both
//! cameras to that zone's canonical orientation.
//!
//! # Key entry points
//!
//! - [`engine::ViewCubeEngine`] - owns both viewports and drives transitions
//! - [`input::InputProcessor`] - turns raw pointer events into
//!   [`engine::command::CubeCommand`]s
//! - [`orientation::OrientationTable`] - zone → canonical camera position
//! - [`options::Options`] - runtime configuration (sync, transition, cube
//!   geometry, style, labels)
//!
//! # Architecture
//!
//! Rendering stays with the host. The host hands the engine an
//! [`camera::OrbitController`] for its scene camera, forwards input as
//! commands, calls [`engine::ViewCubeEngine::update`] once per frame and
//! draws the panels from [`engine::ViewCubeEngine::layout`]. Every user
//! change on one viewport passes that viewport's
//! [`sync::ChangeThrottle`] and then a [`sync::CameraLink`] toward the
//! other; writes made by a link never raise a further change.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod orientation;
pub mod sync;

pub use engine::command::CubeCommand;
pub use engine::ViewCubeEngine;
pub use error::CubeError;
pub use options::Options;
pub use orientation::Zone;
