//! Error types
//!
//! `ValidationError` covers malformed actions and plans. `JudgeError` wraps it
//! together with the failures of the file-loading surfaces (config, plan files).

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum JudgeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl JudgeError {
    /// A short message safe to show to whoever supplied the input.
    pub fn user_hint(&self) -> String {
        match self {
            JudgeError::Validation(e) => e.hint().0,
            JudgeError::Config(_) => {
                "Check the [matching] and [logging] sections of the config file.".to_string()
            }
            JudgeError::Io { .. } => "Check that the file exists and is readable.".to_string(),
            JudgeError::Parse { .. } => {
                "Plans must be a JSON array of objects with ID, Description, Frequency and Type."
                    .to_string()
            }
        }
    }

    /// Whether correcting the input and retrying can succeed.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, JudgeError::Io { .. })
    }
}
