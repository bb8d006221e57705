use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::animation::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transition", inline)]
#[serde(default)]
/// Zone-selection animation parameters.
pub struct TransitionOptions {
    /// Length of a zone transition in milliseconds.
    #[schemars(title = "Duration (ms)", range(min = 0, max = 5000), extend("step" = 50))]
    pub duration_ms: u64,
    /// Progress curve.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl TransitionOptions {
    /// Duration as a [`Duration`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            easing: EasingFunction::Linear,
        }
    }
}
