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

//! Interactive orbit camera and orbital motion for a small solar-system
//! scene.
//!
//! Orrery owns the parts of an orrery viewer that carry state from frame to
//! frame: a damped, pointer-driven orbit camera, scripted camera flights
//! between bodies, and the integrator that moves planets along their
//! circular orbits. Rasterization is left to whichever renderer embeds the
//! crate; it reads the camera matrices (or the packed
//! [`camera::core::CameraUniform`]) and the body positions each frame.
//!
//! # Key entry points
//!
//! - [`engine::OrreryEngine`] - owns every component and runs the frame
//! - [`camera::controller::OrbitController`] - the orbit camera
//! - [`camera::flight::FlightTween`] - eased camera flights
//! - [`orbit::system::SolarSystem`] - the body registry and integrator
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Frame order
//!
//! Each call to [`engine::OrreryEngine::frame`] advances the bodies, then
//! ticks any active camera flight, then lets the controller resolve the
//! final camera pose from its pending input. Input handlers only accumulate
//! deltas, so the pose has exactly one writer per frame.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod orbit;
pub mod scene;
pub mod util;
