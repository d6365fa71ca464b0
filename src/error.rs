use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when fetching or parsing the episode catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to fetch catalog from {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to parse catalog JSON: {0}")]
    ParseFailed(#[from] serde_json::Error),

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Errors that can occur when mapping a catalog entry into a display episode
#[derive(Error, Debug)]
pub enum EpisodeError {
    #[error("Episode '{id}' has an invalid duration: {value}")]
    InvalidDuration { id: String, value: String },

    #[error("Episode '{id}' has an unparseable publication date '{date_str}'")]
    InvalidDate { id: String, date_str: String },

    #[error("Catalog entry #{index} is malformed: {reason}")]
    Malformed { index: usize, reason: String },
}

/// Errors that can occur when reading or writing the build manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write manifest file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest JSON in {path}: {source}")]
    JsonParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize manifest: {0}")]
    JsonSerializeFailed(#[from] serde_json::Error),
}

/// Top-level errors for site generation
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Failed to create directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove stale page {path}: {source}")]
    RemovePageFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write page {path}: {source}")]
    WritePageFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
