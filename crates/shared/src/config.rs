//! Configuration types for Skillwire
//!
//! Every field has a default, so an absent or empty file reproduces the
//! standard demo wiring: Java then Database on 127.0.0.1:8080.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Result, SkillwireError};

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// TCP port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// `host:port`, suitable for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base URL printed in the startup summary
    pub fn base_url(&self) -> String {
        format!("http://{}", self.bind_addr())
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,

    /// Emit JSON lines instead of the human format
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

/// Top-level configuration file format (skillwire.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub server: ServerConfig,

    /// Catalog ids of the skills given to the employee, in order
    pub skills: Vec<String>,

    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            skills: default_skills(),
            log: LogConfig::default(),
        }
    }
}

fn default_skills() -> Vec<String> {
    vec!["java".to_string(), "database".to_string()]
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text; an empty document yields defaults
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(SkillwireError::Config("server.host must not be empty".to_string()));
        }
        if self.server.port == 0 {
            return Err(SkillwireError::Config("server.port must not be 0".to_string()));
        }
        if let Some(blank) = self.skills.iter().find(|id| id.trim().is_empty()) {
            return Err(SkillwireError::Config(format!(
                "skills contains a blank id: {:?}",
                blank
            )));
        }
        Ok(())
    }
}
