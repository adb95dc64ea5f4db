use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GazetteError {
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid config: {message}")]
    ConfigInvalid { message: String },

    #[error("Template file not found: {path}")]
    TemplateNotFound { path: PathBuf },

    #[error("Content error in {path}: {message}")]
    Content { path: PathBuf, message: String },

    #[error("Metadata parse error in {path}: {source}")]
    Metadata {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },

    #[error("Manifest error in {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GazetteError>;
