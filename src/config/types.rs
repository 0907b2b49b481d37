// Configuration type definitions

use serde::Deserialize;

/// Inference server section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Full URL of the generate endpoint
    #[serde(default = "default_url")]
    pub url: String,
    /// Model identifier passed through to the server
    #[serde(default = "default_model")]
    pub model: String,
    /// Model family that selects the prompt template and stop sentinels
    #[serde(default = "default_family")]
    pub family: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            url: default_url(),
            model: default_model(),
            family: default_family(),
        }
    }
}

fn default_url() -> String {
    crate::ollama::DEFAULT_URL.to_string()
}

fn default_model() -> String {
    "codellama:7b-code".to_string()
}

fn default_family() -> String {
    crate::prompt::DEFAULT_FAMILY.to_string()
}

/// Editor presentation section
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Columns a tab character expands to in the display
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            tab_size: default_tab_size(),
        }
    }
}

fn default_tab_size() -> usize {
    4
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}
