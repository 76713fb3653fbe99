//! Error types for the file-level helpers.
//!
//! The analysis pipeline itself never fails; these errors only surface where
//! a file is read or an output is written.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KmlError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a .kml file: {path}")]
    UnsupportedExtension { path: PathBuf },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, KmlError>;
