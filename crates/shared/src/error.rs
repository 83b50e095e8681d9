//! Error types for Skillwire

use thiserror::Error;

/// General Skillwire error type
#[derive(Debug, Error)]
pub enum SkillwireError {
    #[error("Skill '{id}' not found. Available skills: {}", available.join(", "))]
    UnknownSkill { id: String, available: Vec<String> },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SkillwireError>;
