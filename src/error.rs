//! Error types for flatconf

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the flatconf application
#[derive(Debug, Error)]
pub enum FlatconfError {
    #[error("Can't read the file located at \"{path}\"")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't write to the file located at \"{path}\"")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Key not found: '{0}'")]
    KeyNotFound(String),
}

impl FlatconfError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FlatconfError::ReadFile { .. } => 2,
            FlatconfError::WriteFile { .. } => 3,
            FlatconfError::KeyNotFound(_) => 4,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FlatconfError::ReadFile { path, .. } => {
                format!(
                    "Can't read the file located at \"{}\"\n\n\
                    Suggestions:\n\
                    • Check that the file exists and is readable\n\
                    • 'flatconf set <file> <key> <value>' creates the file for you",
                    path.display()
                )
            }
            FlatconfError::KeyNotFound(key) => {
                format!(
                    "Key not found: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'flatconf list <file>' to see the stored keys\n\
                    • Keys are matched verbatim, including case and whitespace",
                    key
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using FlatconfError
pub type Result<T> = std::result::Result<T, FlatconfError>;
