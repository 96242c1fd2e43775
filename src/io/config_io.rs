use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default config location: `<config dir>/desk/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("desk").join("config.toml"))
}

/// Load the app config.
///
/// An explicit path must exist and parse; the default path is optional — a
/// missing file (or no resolvable config dir) yields the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(AppConfig::default()),
        },
    };

    let text = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        source: e,
    })?;
    let config: AppConfig = toml::from_str(&text)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::calendar::GridPolicy;
    use tempfile::TempDir;

    #[test]
    fn test_load_explicit_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[calendar]
note_grid = "fixed"

[notes]
categories = ["lab", "field"]
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.calendar.note_grid, GridPolicy::Fixed);
        assert_eq!(config.calendar.task_grid, GridPolicy::Fixed);
        assert_eq!(config.notes.categories, vec!["lab", "field"]);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[calendar\n").unwrap();
        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
