//! Configuration module for Piste.
//!
//! Handles the settings file, environment variables, and defaults.

mod settings;

pub use settings::{
    expand_env_vars, ChartSettings, DataSettings, MapSettings, ServerSettings, Settings,
    SettingsError,
};
