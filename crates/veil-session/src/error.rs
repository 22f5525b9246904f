//! Error types for the session layer.

use veil_protocol::ErrorKind;

/// Errors that can occur during session resolution.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The presented token matched no player in the room's roster.
    ///
    /// Deliberately a single catch-all: a missing token, a malformed
    /// token, and a valid-looking token for the wrong room all produce
    /// this same error, so the authentication layer leaks nothing about
    /// which case occurred.
    #[error("invalid or unknown session token")]
    InvalidSession,
}

impl SessionError {
    /// Maps this error onto the shared taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSession => ErrorKind::Auth,
        }
    }
}
