use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How zone selection behaves relative to the canonical positions.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    /// Zone selection animates to the canonical position (code 0).
    #[default]
    FocusTarget,
    /// Zone selection leaves the camera alone; only linking runs (code 1).
    FreeRotation,
}

impl SyncMode {
    /// Mode for a host-side integer code. Unknown codes yield `None`.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::FocusTarget),
            1 => Some(Self::FreeRotation),
            _ => None,
        }
    }

    /// Integer code of this mode.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::FocusTarget => 0,
            Self::FreeRotation => 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Sync", inline)]
#[serde(default)]
/// Camera sync between the primary viewport and the cube.
pub struct SyncOptions {
    /// Master switch for both sync directions.
    #[schemars(title = "Sync Cameras")]
    pub enabled: bool,
    /// Throttle window in milliseconds. 0 disables sync; other values are
    /// clamped to `[100, 1000]`.
    #[schemars(title = "Sync Frequency (ms)", range(min = 0, max = 1000), extend("step" = 50))]
    pub frequency_ms: i64,
    /// Zone-selection behavior.
    #[schemars(title = "Sync Mode")]
    pub mode: SyncMode,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            frequency_ms: 100,
            mode: SyncMode::FocusTarget,
        }
    }
}
