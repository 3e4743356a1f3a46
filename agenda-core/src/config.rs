//! Global agenda configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{AgendaError, AgendaResult};

static DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_collaborators() -> Vec<String> {
    vec!["Denis".to_string(), "Isis".to_string()]
}

/// Global configuration at ~/.config/agenda/config.toml
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    /// Base URL of the agenda server.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Known collaborator names, in the order their checkboxes appear.
    #[serde(default = "default_collaborators")]
    pub collaborators: Vec<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            server_url: default_server_url(),
            collaborators: default_collaborators(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> AgendaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgendaError::Config("Could not determine config directory".into()))?
            .join("agenda");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> AgendaResult<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        toml::from_str(&contents)
            .map_err(|e| AgendaError::Config(format!("{}: {}", path.display(), e)))
    }
}
