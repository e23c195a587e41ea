use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or querying the signature registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid signature: a signature needs at least one byte")]
    InvalidSignature,

    #[error("Signature not found: {0}")]
    NotFound(String),
}

/// Recoverable failures of a category extractor
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Failed to decode image header of {}: {message}", path.display())]
    ImageDecode { path: PathBuf, message: String },

    #[error("Failed to read metadata of {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Per-file failures that happen before a buffer reaches the matcher
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Error opening file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
