use crate::errors::ConfigResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub const FLEE_REFUSAL_TEXT: &str = "No! There's no running from a trainer battle!";
pub const EMPTY_MOVE_TEXT: &str = "-";
pub const MAX_MOVES: usize = 4;

/// Top-level configuration, usually read from a RON file.
///
/// ```text
/// (
///     selector: (flee_refusal_text: "Not now!"),
///     mods: (enabled: ["Walk Through Walls"]),
/// )
/// ```
///
/// Omitted fields keep their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ControlsConfig {
    pub selector: SelectorConfig,
    pub mods: ModsConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SelectorConfig {
    pub flee_refusal_text: String,
    // Text for unused move slots
    pub empty_move_text: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            flee_refusal_text: FLEE_REFUSAL_TEXT.to_string(),
            empty_move_text: EMPTY_MOVE_TEXT.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ModsConfig {
    /// Names of mods to enable at startup.
    pub enabled: Vec<String>,
}

impl ControlsConfig {
    pub fn from_ron_str(source: &str) -> ConfigResult<Self> {
        Ok(ron::from_str(source)?)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_ron_str(&source)?;
        info!(path = %path.display(), "loaded controls config");
        Ok(config)
    }
}
