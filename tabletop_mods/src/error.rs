//! Error types for the mod subsystem
//!
//! This module defines the error taxonomy shared by mod loading, path
//! sandboxing, resource resolution and spawning.

use std::fmt;

/// Result type for mod subsystem operations
pub type Result<T> = std::result::Result<T, Error>;

/// Mod subsystem errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed or missing document field
    Parse(String),

    /// Path resolves outside the mod directory and the built-in namespace
    SandboxViolation(String),

    /// Resource could not be found by the decode collaborator
    NotFound(String),

    /// Resource was found but could not be decoded
    DecodeError(String),

    /// Spawn instance names an asset absent from both mod and built-in tables
    UnknownAssetReference(String),

    /// Filesystem failure while reading a mod description
    Io(String),

    /// Scene collaborator refused to create or update an object
    SpawnFailed(String),
}

impl Error {
    /// True for the "resource missing" family (`NotFound`, `DecodeError`, `SandboxViolation`)
    pub fn is_missing_resource(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_) | Error::DecodeError(_) | Error::SandboxViolation(_)
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
            Error::SandboxViolation(path) => write!(f, "Sandbox violation: {}", path),
            Error::NotFound(path) => write!(f, "Resource not found: {}", path),
            Error::DecodeError(msg) => write!(f, "Decode error: {}", msg),
            Error::UnknownAssetReference(name) => write!(f, "Unknown asset reference: {}", name),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::SpawnFailed(msg) => write!(f, "Spawn failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
