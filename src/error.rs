use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while starting career-mentor
#[derive(Debug, Error)]
pub enum MentorError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
