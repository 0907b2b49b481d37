//! Configuration loading
//!
//! Reads `~/.config/ghostfill/config.toml` once at startup. Any problem
//! (missing file, unreadable, bad TOML) falls back to defaults silently;
//! a completion sidekick should never refuse to start over config.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

pub mod types;

pub use types::{Config, ServerConfig, UiConfig};

const CONFIG_DIR: &str = "ghostfill";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> Config {
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
        Err(_) => Config::default(),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
