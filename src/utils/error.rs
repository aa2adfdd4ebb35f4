use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Catalog load failed: {message}")]
    LoadError { message: String },

    #[error("Catalog save failed: {message}")]
    SaveError { message: String },

    #[error("Contact webhook rejected submission with status {status}")]
    SubmitError { status: u16 },

    #[error("Not signed in: {message}")]
    AuthError { message: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
