//! Error types for the conversion pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a conversion run.
///
/// Structural absence is not represented here: a root with no matching
/// multiplex directories, or a multiplex without a `services`
/// subdirectory, simply contributes no channels.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The multiplex search pattern could not be built from the root path.
    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A path matched by the search pattern could not be inspected.
    #[error("Failed to enumerate configuration tree: {0}")]
    Enumerate(#[from] glob::GlobError),

    /// A configuration document or directory could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A configuration document is not valid JSON or lacks a required field.
    #[error("Malformed configuration {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The delivery system does not map onto a VDR source letter.
    #[error("Unsupported delivery system {delsys:?}: medium must be one of T, C, S")]
    UnsupportedDeliverySystem { delsys: String },

    /// A modulation field does not have the shape the channels.conf
    /// parameter grammar encodes.
    #[error("Malformed {field} value {value:?} in multiplex configuration")]
    MalformedField { field: &'static str, value: String },

    /// The output destination could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConvertError>;
