//! Configuration loading
//!
//! Reads `~/.config/eventide/config.toml`. A missing or malformed file is
//! not an error: the loader degrades to defaults so the offline commands
//! keep working without any setup.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

pub mod types;

pub use types::{AiConfig, AiProviderType, Config, ProviderConfig};

const CONFIG_DIR: &str = "eventide";
const CONFIG_FILE: &str = "config.toml";

/// Path to the user config file, if a home directory exists
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user config, falling back to defaults
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &PathBuf) -> Config {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return Config::default(),
    };

    let mut contents = String::new();
    if file.read_to_string(&mut contents).is_err() {
        return Config::default();
    }

    parse_config_toml(&contents)
}

pub fn parse_config_toml(content: &str) -> Config {
    match toml::from_str::<Config>(content) {
        Ok(config) => config,
        Err(e) => {
            log::debug!("Config parse failed, using defaults: {e}");
            Config::default()
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
