use std::path::PathBuf;

use thiserror::Error;
pub use url::ParseError as UrlParseError;

/// Error types for the Plagtracker API client.
#[derive(Error, Debug)]
pub enum PlagtrackerError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error parsing URL.
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] UrlParseError),

    /// Error serializing or deserializing JSON.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The API answered with valid JSON that is not an object.
    #[error("Wrong response was got: {0}")]
    WrongResponse(String),

    /// The response envelope lacks a required field.
    #[error("Missing field in response: {0}")]
    MissingField(&'static str),

    /// The text hash cannot be used as a path segment.
    #[error("Invalid text hash: {0:?}")]
    InvalidHash(String),

    /// The document extension is not on the allow-list.
    #[error("Unsupported file type {extension:?}: only .doc, .csv, .html, .odt, .rtf, .txt, .docx files can be uploaded")]
    UnsupportedFileType { extension: String },

    /// The document exceeds the upload limit.
    #[error("Document is {size} bytes, maximum upload size is {max} bytes")]
    FileTooLarge { size: u64, max: u64 },

    /// Reading a document from disk failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),
}

/// Result type for Plagtracker API operations.
pub type PlagtrackerResult<T> = Result<T, PlagtrackerError>;
