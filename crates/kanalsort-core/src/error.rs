use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KanalsortError {
    #[error("Input playlist not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Failed to write report to {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config parse error in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Config key not found: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KanalsortError>;

impl KanalsortError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } => 2,
            Self::ReportWrite { .. } => 3,
            Self::ConfigKeyNotFound { .. } => 5,
            _ => 1,
        }
    }
}
