//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub ripple: RippleConfig,
    #[serde(default)]
    pub tasks: TasksConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How an existing task is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// The row itself turns into a text field.
    #[default]
    Inline,
    /// A centered dialog holds the text field.
    Modal,
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Animation frame interval.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default)]
    pub edit_mode: EditMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            edit_mode: EditMode::default(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

/// Button press feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RippleConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_ripple_duration_ms")]
    pub duration_ms: u64,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: default_ripple_duration_ms(),
        }
    }
}

impl RippleConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Tasks shown on startup. Nothing is written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksConfig {
    #[serde(default = "default_initial_tasks")]
    pub initial: Vec<String>,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            initial: default_initial_tasks(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` filter directive, e.g. `"info"` or `"ripplist=debug"`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_tick_rate_ms() -> u64 {
    16
}
fn default_ripple_duration_ms() -> u64 {
    500
}
fn default_initial_tasks() -> Vec<String> {
    vec![
        "Study the code".to_string(),
        "Go running".to_string(),
        "Buy groceries".to_string(),
    ]
}
fn default_log_dir() -> String {
    "~/.local/share/ripplist/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
