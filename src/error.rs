use thiserror::Error;

#[derive(Error, Debug)]
pub enum WhatsnewError {
    #[error("Project validation failed: {0}")]
    ProjectValidation(String),

    #[error("Package manager command failed: {0}")]
    CommandExecution(String),

    #[error("Manifest update failed: {0}")]
    ManifestEdit(String),

    #[error("Unknown package manager: {0}")]
    UnknownPackageManager(String),

    #[error("Config parsing failed: {0}")]
    ConfigParsing(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WhatsnewError>;
