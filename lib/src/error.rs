use std::borrow::Cow;
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RedactorError {
    #[error("Element not found: {id}")]
    NotFound { id: String },
    #[error("Error reading config")]
    ReadConfig(io::Error),
    #[error("Error parsing config")]
    ParseConfig(Cow<'static, str>),
    #[error("Configuration error")]
    Config(Cow<'static, str>),
    #[error("Error opening file")]
    OpenFile(anyhow::Error),
    #[error("Error creating file")]
    CreateFile(anyhow::Error),
    #[error("Error reading file")]
    ReadFile(io::Error),
    #[error("Error writing file")]
    WriteFile(io::Error),
    #[error("Serialization error")]
    Serialize(Cow<'static, str>),
    #[error("Error")]
    Other(Cow<'static, str>),
}

impl RedactorError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}
