use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DevkitError {
    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error("plugin not found: {0}")]
    PluginNotFound(String),

    #[error("unknown tool '{0}': expected claude, opencode, copilot, or codex")]
    UnknownTool(String),

    #[error("unknown category '{0}': expected agents, commands, skills, or rules")]
    UnknownCategory(String),

    #[error("invalid name '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidName(String),

    #[error("invalid manifest {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },

    #[error("missing front matter in {0}: expected a '---' delimited YAML block")]
    MissingFrontMatter(PathBuf),

    #[error("backup source does not exist: {0}")]
    BackupSourceMissing(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Glob(#[from] glob::PatternError),
}

pub type Result<T> = std::result::Result<T, DevkitError>;
