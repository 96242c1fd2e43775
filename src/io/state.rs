use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Persisted UI state: which view was open and how it was filtered.
/// Item collections are deliberately NOT part of this — they are memory-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiState {
    /// "tasks" or "notes"
    #[serde(default)]
    pub workspace: String,
    /// "list" or "calendar"
    #[serde(default)]
    pub pane: String,
    /// Task category filter (stable key)
    #[serde(default)]
    pub task_category: Option<String>,
    /// Note category filter
    #[serde(default)]
    pub note_category: Option<String>,
    /// Displayed calendar month as (year, month)
    #[serde(default)]
    pub month: Option<(i32, u32)>,
    #[serde(default)]
    pub last_search: Option<String>,
}

/// State file location: `<state dir>/desk/state.json`
fn state_path() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("desk").join("state.json"))
}

/// Read saved UI state. Returns None if missing or unreadable — state restore
/// is best-effort.
pub fn read_ui_state() -> Option<UiState> {
    let path = state_path()?;
    let text = fs::read_to_string(path).ok()?;
    serde_json::from_str(&text).ok()
}

/// Write UI state to disk, creating the directory if needed
pub fn write_ui_state(state: &UiState) -> io::Result<()> {
    let path = state_path().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no state directory available")
    })?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}
