//! Camera system for the orrery view.
//!
//! Provides an orbital camera with damped rotation, panning and zoom, plus
//! eased flights that retarget it between bodies.

/// Orbit camera controller: pointer input, limits, damping.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Eased, replaceable camera flights.
pub mod flight;

pub use controller::{DragMode, OrbitController};
pub use flight::{CameraFlight, FlightTween};
