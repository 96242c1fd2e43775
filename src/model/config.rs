use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::calendar::GridPolicy;

/// Configuration from config.toml. Every section is optional; a missing file
/// yields `AppConfig::default()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub notes: NotesConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides for the theme palette, e.g. background = "#0C001B"
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

/// Which grid policy each workspace's calendar uses. The defaults match the
/// two original views: a fixed 6-week grid for tasks, a variable-length one
/// for notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default = "default_task_grid")]
    pub task_grid: GridPolicy,
    #[serde(default = "default_note_grid")]
    pub note_grid: GridPolicy,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            task_grid: default_task_grid(),
            note_grid: default_note_grid(),
        }
    }
}

fn default_task_grid() -> GridPolicy {
    GridPolicy::Fixed
}

fn default_note_grid() -> GridPolicy {
    GridPolicy::Flow
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesConfig {
    /// Seed entries for the user-defined note category list
    #[serde(default = "default_note_categories")]
    pub categories: Vec<String>,
}

impl Default for NotesConfig {
    fn default() -> Self {
        NotesConfig {
            categories: default_note_categories(),
        }
    }
}

fn default_note_categories() -> Vec<String> {
    vec!["personal".into(), "work".into(), "ideas".into()]
}
