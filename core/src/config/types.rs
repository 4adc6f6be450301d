use serde::{Deserialize, Serialize};

use crate::i18n::Locale;
use crate::menu::{MenuOptions, Position};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub project_code: i64,

    #[serde(default)]
    pub workflow_code: i64,

    #[serde(default)]
    pub locale: Locale,

    /// Placement of a copied node relative to the menu position.
    #[serde(default = "default_copy_offset")]
    pub copy_offset: Position,

    #[serde(default)]
    pub scheduler: SchedulerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_copy_offset() -> Position {
    Position::new(100, 100)
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            project_code: 0,
            workflow_code: 0,
            locale: Locale::default(),
            copy_offset: default_copy_offset(),
            scheduler: SchedulerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl MenuConfig {
    pub fn menu_options(&self) -> MenuOptions {
        MenuOptions {
            locale: self.locale,
            copy_offset: self.copy_offset,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sent as the `token` header. Empty means no header.
    #[serde(default)]
    pub token: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:12345/dolphinscheduler".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a daily file under `directory` (default `~/.dagmenu/logs`).
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "dagmenu_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
        }
    }
}
