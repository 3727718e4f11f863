//! TOML-based configuration for Piste.
//!
//! Supports a config file (piste.toml) with environment variable expansion
//! in the data path.
//!
//! Example configuration:
//! ```toml
//! [data]
//! path = "${PISTE_DATA}/resorts.csv"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8050
//! open_browser = false
//!
//! [map]
//! center_lat = 44.5
//! center_lon = -97.5
//! zoom = 1.85
//! radius = 20
//! style = "open-street-map"
//! color_scale = "Viridis"
//! flag_matching = "all"   # or "legacy"
//!
//! [chart]
//! top_n = 5
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::view::{FlagMatching, GeoPoint, MapLayout, DEFAULT_TOP_N};

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Resort data file.
    pub data: DataSettings,

    /// HTTP server.
    pub server: ServerSettings,

    /// Resort map layout and filtering.
    pub map: MapSettings,

    /// Country profiler chart.
    pub chart: ChartSettings,
}

/// Resort data file settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DataSettings {
    /// Path to the ISO-8859-1 resort CSV (supports ${ENV_VAR} expansion).
    pub path: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: "./resorts.csv".to_string(),
        }
    }
}

impl DataSettings {
    /// Get the data path with environment variables expanded.
    pub fn resolved_path(&self) -> Result<PathBuf, SettingsError> {
        expand_env_vars(&self.path).map(PathBuf::from)
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Open the dashboard in a browser once the server is listening.
    pub open_browser: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
            open_browser: false,
        }
    }
}

/// Density map settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MapSettings {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: f64,
    /// Density kernel radius in pixels.
    pub radius: u32,
    pub style: String,
    pub color_scale: String,
    pub flag_matching: FlagMatching,
}

impl Default for MapSettings {
    fn default() -> Self {
        let layout = MapLayout::default();
        Self {
            center_lat: layout.center.lat,
            center_lon: layout.center.lon,
            zoom: layout.zoom,
            radius: layout.radius,
            style: layout.map_style,
            color_scale: layout.color_scale,
            flag_matching: layout.flag_matching,
        }
    }
}

impl MapSettings {
    pub fn layout(&self) -> MapLayout {
        MapLayout {
            center: GeoPoint {
                lat: self.center_lat,
                lon: self.center_lon,
            },
            zoom: self.zoom,
            radius: self.radius,
            map_style: self.style.clone(),
            color_scale: self.color_scale.clone(),
            flag_matching: self.flag_matching,
        }
    }
}

/// Country profiler settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Number of bars in the ranking chart.
    pub top_n: usize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `PISTE_CONFIG`
    /// 2. `./piste.toml`
    /// 3. `~/.config/piste/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("PISTE_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("piste.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("piste").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.chart.top_n == 0 {
            return Err(SettingsError::InvalidConfig(
                "chart.top_n must be at least 1".to_string(),
            ));
        }
        if !(self.map.zoom.is_finite() && self.map.zoom >= 0.0) {
            return Err(SettingsError::InvalidConfig(format!(
                "map.zoom must be a non-negative number, got {}",
                self.map.zoom
            )));
        }
        Ok(())
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let braced = chars.peek() == Some(&'{');
        if braced {
            chars.next();
        }

        let mut var_name = String::new();
        while let Some(&ch) = chars.peek() {
            if braced && ch == '}' {
                chars.next();
                break;
            }
            if !braced && !(ch.is_alphanumeric() || ch == '_') {
                break;
            }
            var_name.push(ch);
            chars.next();
        }

        if var_name.is_empty() && !braced {
            // Just a lone $, keep it
            result.push('$');
            continue;
        }

        let value =
            env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
        result.push_str(&value);
    }

    Ok(result)
}
