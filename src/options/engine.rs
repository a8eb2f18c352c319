use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Loop start-up and pacing.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Engine", inline)]
#[serde(default)]
pub struct EngineOptions {
    /// Theme the shared cell starts with when the engine creates it.
    #[schemars(title = "Initial Theme")]
    pub initial_theme: Theme,
    /// Fixed seed for reproducible pools (absent = OS entropy).
    #[schemars(skip)]
    pub seed: Option<u64>,
    /// Rendered passes per second (0 = every display frame).
    #[schemars(title = "Target FPS", range(min = 0, max = 240))]
    pub target_fps: u32,
}
