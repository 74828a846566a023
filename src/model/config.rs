use std::collections::HashMap;

use serde::{Deserialize, Serialize};

fn default_autosave_delay_ms() -> u64 {
    500
}

/// Application config, read from `config.toml` in the data directory.
/// Every field has a default; a missing file means all defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Quiet period before a mutated store is written to disk
    #[serde(default = "default_autosave_delay_ms")]
    pub autosave_delay_ms: u64,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            autosave_delay_ms: default_autosave_delay_ms(),
            ui: UiConfig::default(),
        }
    }
}

/// UI color overrides, e.g. `[ui.colors] background = "#101020"`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
