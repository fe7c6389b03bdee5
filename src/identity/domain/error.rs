//! Error types for identity domain validation.

use thiserror::Error;

/// Errors returned while constructing domain identity values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityDomainError {
    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The username exceeds the persisted length limit.
    #[error("username must not exceed {0} characters")]
    UsernameTooLong(usize),

    /// The email address is structurally invalid.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,

    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    PasswordHashing(String),
}
