use thiserror::Error;

use crate::{config::LoadError, domain::image::ImageError, infra::error::InfraError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Image(#[from] ImageError),
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error("api base URL is required (use --base-url or AUTOLIST__API__BASE_URL)")]
    MissingBaseUrl,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("listing was not added: {0}")]
    NotListed(String),
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
