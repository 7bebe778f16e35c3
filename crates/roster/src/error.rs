//! Error types for roster.
//!
//! This module defines all error types used throughout the roster crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for roster operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to run database migrations.
    #[error("database migration failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Session Errors ===
    /// The login form was submitted with missing fields.
    #[error("{message}")]
    LoginRejected {
        /// Inline validation message shown to the operator.
        message: String,
    },

    /// A dashboard operation was attempted without an active session.
    #[error("not logged in; run `roster login` first")]
    NotLoggedIn,

    // === Roster Errors ===
    /// No employee with the given id exists.
    #[error("no employee with id {0}")]
    EmployeeNotFound(i64),

    /// A record could not be built from the supplied fields.
    #[error("invalid employee record: {message}")]
    InvalidRecord {
        /// What is missing or wrong.
        message: String,
    },

    /// The selected file is not an image.
    #[error("unsupported image file {path}: {message}")]
    UnsupportedImage {
        /// Path of the selected file.
        path: PathBuf,
        /// Description of what was detected.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for roster operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a login rejection carrying an inline message.
    #[must_use]
    pub fn login_rejected(message: impl Into<String>) -> Self {
        Self::LoginRejected {
            message: message.into(),
        }
    }

    /// Create an invalid record error.
    #[must_use]
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }

    /// Create an unsupported image error.
    #[must_use]
    pub fn unsupported_image(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::UnsupportedImage {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this error means the session gate is closed.
    #[must_use]
    pub fn is_not_logged_in(&self) -> bool {
        matches!(self, Self::NotLoggedIn)
    }

    /// Check if this error is a login validation failure.
    #[must_use]
    pub fn is_login_rejected(&self) -> bool {
        matches!(self, Self::LoginRejected { .. })
    }
}
