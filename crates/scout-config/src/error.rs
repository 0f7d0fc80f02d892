//! Error types for scout-config

use crate::schema::Violation;

/// Result type for scout-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a repository configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] scout_fs::Error),

    #[error("Failed to parse configuration: {message}")]
    Parse { message: String },

    #[error("Configuration failed validation: {}", join_violations(violations))]
    Schema { violations: Vec<Violation> },

    #[error("Invalid exclude pattern {pattern:?}: {message}")]
    ExcludePattern { pattern: String, message: String },

    #[error("Failed to serialize configuration: {message}")]
    Serialize { message: String },
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
