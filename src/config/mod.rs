use crate::errors::{AppError, AppResult};
use crate::models::Standards;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Required-minutes standards for full / 반차 / 반반차 days.
    #[serde(default)]
    pub standards: Standards,

    /// Weekdays that count as working days ("mon".."sun").
    #[serde(default = "default_weekdays")]
    pub weekdays: Vec<String>,

    /// Display-name → canonical-name rewrites applied during extraction.
    /// Names absent from the map pass through unchanged.
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

fn default_weekdays() -> Vec<String> {
    ["mon", "tue", "wed", "thu", "fri"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            standards: Standards::default(),
            weekdays: default_weekdays(),
            aliases: HashMap::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("chulcheck")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".chulcheck")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("chulcheck.conf")
    }

    /// Load configuration from the default location, or return defaults if
    /// no file exists yet.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from an explicit path (the global --config flag).
    pub fn load_from<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.as_ref().display())))?;

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.as_ref().display())))
    }

    /// Create the config directory and write a default config file.
    pub fn init_all() -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        let yaml = serde_yaml::to_string(&Config::default())
            .map_err(|e| AppError::ConfigSave(e.to_string()))?;

        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }

    /// Parse the configured weekday names into chrono weekdays.
    pub fn permitted_weekdays(&self) -> AppResult<Vec<Weekday>> {
        parse_weekdays_list(&self.weekdays)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))
    }
}

/// Parse a list of weekday names ("mon", "monday", case-insensitive).
pub fn parse_weekdays_list(names: &[String]) -> AppResult<Vec<Weekday>> {
    names
        .iter()
        .map(|w| {
            w.parse::<Weekday>()
                .map_err(|_| AppError::InvalidWeekday(w.clone()))
        })
        .collect()
}

/// Parse a comma-separated weekday list from the command line.
pub fn parse_weekdays_arg(arg: &str) -> AppResult<Vec<Weekday>> {
    let names: Vec<String> = arg
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if names.is_empty() {
        return Err(AppError::InvalidWeekday(arg.to_string()));
    }

    parse_weekdays_list(&names)
}
