use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration for `FeatDeck` hosts (the CLI today).
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub panel: PanelConfig,
    pub log: LogConfig,
}

/// Panel mounting behavior and the default feature list.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Whether the host should mount the panel once its content is ready.
    pub auto_mount: bool,
    /// Features listed by `featdeck panel` when none are given explicitly.
    pub items: Vec<PanelItemConfig>,
}

/// One panel row: a registry path with an optional display label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PanelItemConfig {
    #[serde(default)]
    pub label: Option<String>,
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for PanelConfig {
    fn default() -> Self {
        Self { auto_mount: true, items: Vec::new() }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), dir: None, json: false }
    }
}
