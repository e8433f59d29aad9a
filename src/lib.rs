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

//! Interactive car showroom core: door animation, camera walks, and ray
//! picking over a retained scene graph.
//!
//! A user orbits a camera around a car, clicks its doors to swing them
//! open or shut, walks the camera up to the car and back, and edits the
//! shared paint and glass materials from a control panel. Everything is
//! advanced by one frame loop on one thread.
//!
//! # Key entry points
//!
//! - [`engine::ShowroomEngine`] - owns all interactive state and the frame
//!   loop
//! - [`engine::command::ShowroomCommand`] - every user-facing operation
//! - [`scene::Scene`] - the scene graph; [`scene::demo::demo_car`] builds a
//!   procedural car
//! - [`options::Options`] - runtime configuration (camera presets, door
//!   swing, materials, keybindings)
//! - [`panel`] - control panel seam and the material binding
//!
//! # Frame order
//!
//! Each frame attaches a scene delivered by a loader thread, applies orbit
//! damping, advances every tween through the
//! [`animation::AnimationScheduler`], then hands the scene and camera to an
//! [`engine::renderer::Renderer`]. Door and camera controllers never touch
//! the clock; they start tweens on the scheduler they are given and apply
//! the samples the engine routes back to them.

pub mod animation;
pub mod camera;
pub mod doors;
pub mod engine;
pub mod error;
pub mod input;
pub mod material;
pub mod options;
pub mod panel;
pub mod picking;
pub mod scene;
pub mod util;

pub use engine::command::ShowroomCommand;
pub use engine::ShowroomEngine;
pub use error::ShowroomError;
