use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HashgenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Virtual environment not found at {}", .0.display())]
    MissingEnvironment(PathBuf),

    #[error("Script not found at {}", .0.display())]
    MissingScript(PathBuf),

    #[error("Python environment error: {0}")]
    PythonEnv(String),

    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    #[error("Hashing failed: {0}")]
    Hash(String),

    #[error("Inconsistent outputs: derivation not reliable")]
    InconsistentOutputs,

    #[error("Input error: {0}")]
    Prompt(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, HashgenError>;
