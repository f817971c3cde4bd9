//! Error types for the hospital access shell.
//!
//! All fallible operations return `HmsResult<T>`. Absence of a session,
//! unknown permission tokens and unknown notification ids are not errors;
//! they are valid states with a benign result.

use thiserror::Error;

/// The unified error type.
#[derive(Debug, Error)]
pub enum HmsError {
    /// No identity matched the submitted username and password.
    ///
    /// The message is shown to the end user verbatim and deliberately does not
    /// say which half was wrong.
    #[error("Invalid username or password.")]
    InvalidCredentials,

    /// A configuration document is missing, malformed, or inconsistent.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A staff registration collided with an existing id or username.
    #[error("staff member with {field} '{value}' already exists")]
    DuplicateStaff { field: &'static str, value: String },

    /// A directory operation named a staff id that is not registered.
    #[error("no staff member with id '{staff_id}'")]
    UnknownStaff { staff_id: String },

    /// The access log could not record a session event.
    #[error("audit write failed: {reason}")]
    AuditWriteFailed { reason: String },
}

pub type HmsResult<T> = Result<T, HmsError>;
