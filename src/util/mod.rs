//! Shared math and timing helpers.
//!
//! Spherical coordinates for the orbit camera, easing curves for camera
//! flights, and frame timing for the frame driver.

pub mod easing;
pub mod frame_timing;
pub mod spherical;
