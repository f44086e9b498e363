use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera Flights", inline)]
#[serde(default)]
/// Timing and curve of focus-change camera flights.
pub struct FlightOptions {
    /// Flight length in seconds. Zero or less jumps straight to the end.
    #[schemars(title = "Duration", range(min = 0.0, max = 6.0), extend("step" = 0.1))]
    pub duration: f32,
    /// Response curve applied to flight progress.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl Default for FlightOptions {
    fn default() -> Self {
        Self {
            duration: 2.0,
            easing: EasingFunction::DEFAULT,
        }
    }
}
