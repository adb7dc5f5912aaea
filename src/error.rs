use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid ID: {0}")]
    InvalidId(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Store call timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed document: {0}")]
    Decode(#[from] bson::de::Error),

    #[error("Could not encode document: {0}")]
    Encode(#[from] bson::ser::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<mongodb::error::Error> for BlogError {
    fn from(e: mongodb::error::Error) -> Self {
        BlogError::Store(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BlogError>;
