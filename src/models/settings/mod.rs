// Settings module
// Grid configuration, read from an optional TOML file

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::models::ui::ViewType;

pub const SETTINGS_FILE_NAME: &str = "settings.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pixels per hour row
    pub hour_height: f32,
    /// Grid origin for the day view
    pub day_start_hour: i32,
    /// Grid origin for the week view
    pub week_start_hour: i32,
    /// Hour rows drawn by the day view
    pub visible_hours: u8,
    /// 0 = Sunday, 1 = Monday, ...
    pub first_day_of_week: u8,
    pub date_format: String,
    pub default_view: ViewType,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hour_height: 80.0,
            day_start_hour: 7,
            week_start_hour: 8,
            visible_hours: 12,
            first_day_of_week: 1, // Monday
            date_format: "yyyy-MM-dd".to_string(),
            default_view: ViewType::Week,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let settings: Settings =
            toml::from_str(contents).context("Failed to parse settings file")?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;
        Ok(settings)
    }

    /// Load settings from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;
        let settings = Self::from_toml_str(&contents)?;
        log::info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Load settings from the platform config directory.
    pub fn load_default() -> Result<Self> {
        Self::load(&Self::default_path()?)
    }

    pub fn default_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "Ken24T", "calendar-grid")
            .context("Could not determine config directory")?;
        Ok(proj_dirs.config_dir().join(SETTINGS_FILE_NAME))
    }

    /// Grid origin hour for a view, `None` for views without a time grid.
    pub fn start_hour_for(&self, view: ViewType) -> Option<i32> {
        match view {
            ViewType::Day => Some(self.day_start_hour),
            ViewType::Week => Some(self.week_start_hour),
            ViewType::Month => None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.hour_height > 0.0) {
            return Err("hour_height must be positive".to_string());
        }

        for (name, hour) in [
            ("day_start_hour", self.day_start_hour),
            ("week_start_hour", self.week_start_hour),
        ] {
            if !(0..24).contains(&hour) {
                return Err(format!("{} must be between 0 and 23", name));
            }
        }

        if self.visible_hours == 0 || self.visible_hours > 24 {
            return Err("visible_hours must be between 1 and 24".to_string());
        }

        if self.first_day_of_week > 6 {
            return Err("first_day_of_week must be between 0 (Sunday) and 6".to_string());
        }

        Ok(())
    }
}
