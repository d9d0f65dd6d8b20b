use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::client::DEFAULT_API_URL;
use crate::error::{Result, TeamsError};
use crate::types::Role;

pub const DEFAULT_ORG: &str = "HybriStratus";

const TOKEN_ENV_VARS: [&str; 2] = ["AUTH_TOKEN", "GITHUB_TOKEN"];

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub token: Option<String>,
    pub org: Option<String>,
    pub api_url: Option<String>,
    pub default_role: Option<Role>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(config_path).map_err(|e| TeamsError::ConfigRead {
                path: config_path.to_path_buf(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| TeamsError::ConfigParse {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "gh-teams")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(TeamsError::NoConfigDir)
    }

    /// Get API token with env vars taking precedence over config file
    pub fn token(&self) -> Result<String> {
        TOKEN_ENV_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
            .or_else(|| self.token.clone())
            .ok_or(TeamsError::MissingToken)
    }

    /// Get organization, preferring explicit argument over config
    pub fn resolve_org(&self, explicit: Option<&str>) -> String {
        explicit
            .map(String::from)
            .or_else(|| self.org.clone())
            .unwrap_or_else(|| DEFAULT_ORG.to_string())
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Get membership role, preferring explicit argument over config
    pub fn resolve_role(&self, explicit: Option<Role>) -> Option<Role> {
        explicit.or(self.default_role)
    }
}
