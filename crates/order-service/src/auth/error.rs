//! Error types for principal resolution and role checks.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No credential was presented.
    #[error("authorization header missing")]
    MissingCredential,

    /// The header was malformed or the token failed verification. Both cases share
    /// one message so callers cannot tell them apart.
    #[error("invalid or expired token")]
    InvalidCredential,

    /// The principal lacks the role the operation requires.
    #[error("forbidden: requires role {required}")]
    Forbidden { required: String },
}

/// Failure reported by a [`TokenVerifier`](super::TokenVerifier).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("token verification failed: {0}")]
pub struct VerificationError(pub String);
