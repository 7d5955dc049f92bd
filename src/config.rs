//! Global configuration management
//!
//! Config is stored at `~/.config/plugreq/config.toml` (XDG standard), or at
//! the path in `PLUGREQ_CONFIG`. Missing files and fields fall back to the
//! defaults below.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::paths;

/// Global plugreq configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Remote service endpoints
    #[serde(default)]
    pub endpoints: EndpointConfig,
    /// User-facing documentation
    #[serde(default)]
    pub docs: DocsConfig,
    /// Moderation flow settings
    #[serde(default)]
    pub moderation: ModerationConfig,
    /// Plugin maker settings
    #[serde(default)]
    pub make: MakeConfig,
}

/// Remote service endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Plugin builder base URL
    #[serde(default = "default_build_url")]
    pub build_url: String,
    /// GitHub REST API base URL
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,
}

fn default_build_url() -> String {
    "https://pm13api.vvctre.dynv6.net:8439".to_string()
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            build_url: default_build_url(),
            github_api_url: default_github_api_url(),
        }
    }
}

/// Documentation shown to submitters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Page listing the recognized lines
    #[serde(default = "default_docs_url")]
    pub url: String,
}

fn default_docs_url() -> String {
    "https://vvanelslande.github.io/vvctre/Custom-Default-Settings-Plugin-Request".to_string()
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            url: default_docs_url(),
        }
    }
}

/// Moderation flow settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationConfig {
    /// Directory marker files are written to
    #[serde(default = "default_marker_dir")]
    pub marker_dir: PathBuf,
    /// Environment variable holding the API token
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

fn default_marker_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            marker_dir: default_marker_dir(),
            token_env: default_token_env(),
        }
    }
}

/// Plugin maker settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeConfig {
    /// File the downloaded archive is saved as
    #[serde(default = "default_archive_name")]
    pub archive_name: String,
}

fn default_archive_name() -> String {
    "plugin.zip".to_string()
}

impl Default for MakeConfig {
    fn default() -> Self {
        Self {
            archive_name: default_archive_name(),
        }
    }
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the default location, or defaults if it does not exist
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a file, or defaults if it does not exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config in {}", path.display()))
    }

    /// Save config to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// API token from the configured environment variable
    #[must_use]
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.moderation.token_env).ok().filter(|t| !t.is_empty())
    }
}
