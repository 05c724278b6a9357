//! Global dayview configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};
use crate::time_axis::check_viewport;
use crate::window::DayWindow;

const DEFAULT_START_HOUR: u32 = 9;
const DEFAULT_END_HOUR: u32 = 21;
const DEFAULT_VIEWPORT_HEIGHT: f64 = 1200.0;

fn default_start_hour() -> u32 {
    DEFAULT_START_HOUR
}

fn default_end_hour() -> u32 {
    DEFAULT_END_HOUR
}

fn default_viewport_height() -> f64 {
    DEFAULT_VIEWPORT_HEIGHT
}

/// Configuration at ~/.config/dayview/config.toml
///
/// Every field can also be set from the environment, e.g. `DAYVIEW_END_HOUR=18`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayviewConfig {
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,

    #[serde(default = "default_end_hour")]
    pub end_hour: u32,

    /// Height of the day track, in pixels or any linear unit
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,

    /// JSON file with the day's events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_file: Option<PathBuf>,
}

impl Default for DayviewConfig {
    fn default() -> Self {
        DayviewConfig {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            events_file: None,
        }
    }
}

impl DayviewConfig {
    pub fn config_path() -> LayoutResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LayoutError::Config("Could not determine config directory".into()))?
            .join("dayview");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, creating a commented default file on first use.
    pub fn load() -> LayoutResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from `path` (which may be missing), layered under
    /// `DAYVIEW_*` environment variables.
    pub fn load_from(path: &Path) -> LayoutResult<Self> {
        Self::load_layered(path, Environment::with_prefix("DAYVIEW"))
    }

    fn load_layered(path: &Path, env: Environment) -> LayoutResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(env.try_parsing(true))
            .build()
            .map_err(|e| LayoutError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| LayoutError::Config(e.to_string()))
    }

    /// Save the config to `path`, creating its directory if needed.
    pub fn save(&self, path: &Path) -> LayoutResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LayoutError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| LayoutError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| LayoutError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> LayoutResult<()> {
        let contents = format!(
            "\
# dayview configuration

# Visible hours of the day track:
# start_hour = {}
# end_hour = {}

# Height of the day track:
# viewport_height = {:.1}

# Where the day's events live:
# events_file = \"~/events.json\"
",
            DEFAULT_START_HOUR, DEFAULT_END_HOUR, DEFAULT_VIEWPORT_HEIGHT
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LayoutError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| LayoutError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn window(&self) -> LayoutResult<DayWindow> {
        DayWindow::new(self.start_hour, self.end_hour)
    }

    pub fn viewport_height(&self) -> LayoutResult<f64> {
        check_viewport(self.viewport_height)
    }

    /// The events file with `~` expanded.
    pub fn events_path(&self) -> Option<PathBuf> {
        self.events_file.as_ref().map(|p| {
            PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).into_owned())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Loads `path` with a fixed environment instead of the process one.
    fn load_with_env(path: &Path, vars: &[(&str, &str)]) -> DayviewConfig {
        let vars: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let env = Environment::with_prefix("DAYVIEW").source(Some(vars));
        DayviewConfig::load_layered(path, env).unwrap()
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_with_env(&dir.path().join("config.toml"), &[]);

        assert_eq!(config.start_hour, DEFAULT_START_HOUR);
        assert_eq!(config.end_hour, DEFAULT_END_HOUR);
        assert_eq!(config.window().unwrap(), DayWindow::default());
    }

    #[test]
    fn default_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        DayviewConfig::create_default_config(&path).unwrap();
        let config = load_with_env(&path, &[]);

        assert_eq!(config.viewport_height, DEFAULT_VIEWPORT_HEIGHT);
        assert!(config.events_file.is_none());
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = DayviewConfig {
            start_hour: 7,
            end_hour: 19,
            viewport_height: 720.0,
            events_file: Some(PathBuf::from("/tmp/day.json")),
        };

        config.save(&path).unwrap();
        assert_eq!(load_with_env(&path, &[]), config);
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dayview/config.toml");

        DayviewConfig::default().save(&path).unwrap();
        assert_eq!(load_with_env(&path, &[]), DayviewConfig::default());
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        DayviewConfig {
            end_hour: 19,
            ..DayviewConfig::default()
        }
        .save(&path)
        .unwrap();

        let config = load_with_env(&path, &[("DAYVIEW_END_HOUR", "18")]);
        assert_eq!(config.end_hour, 18);
        assert_eq!(config.start_hour, DEFAULT_START_HOUR);
    }

    #[test]
    fn invalid_window_is_reported() {
        let config = DayviewConfig {
            start_hour: 18,
            end_hour: 8,
            ..DayviewConfig::default()
        };
        assert!(matches!(
            config.window(),
            Err(LayoutError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn events_path_expands_tilde() {
        let config = DayviewConfig {
            events_file: Some(PathBuf::from("~/events.json")),
            ..DayviewConfig::default()
        };

        let path = config.events_path().unwrap();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with("events.json"));
    }
}
