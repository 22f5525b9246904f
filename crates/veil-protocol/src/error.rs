//! The error taxonomy shared by every Veil operation.
//!
//! Each crate defines its own concrete error enum (`RoomError`,
//! `SessionError`), but every variant maps onto exactly one of these
//! five kinds. The kind is what the HTTP collaborator keys status codes
//! and retry hints off — the concrete variant supplies the
//! human-readable message.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse classification of an operation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed or out-of-range input (bad name, bad config). Not
    /// retryable until the input is corrected.
    Validation,

    /// The operation is legal in principle but the room's current state
    /// forbids it (name taken, room full, game in progress, already
    /// started). Retry only after the state changes.
    Conflict,

    /// The credentials don't authorize this operation (invalid session,
    /// non-host requester). Never retryable with the same credentials.
    Auth,

    /// No room exists under the given code.
    NotFound,

    /// A system-level fault: code space exhausted, or a broken internal
    /// invariant. Operator-visible, never user-correctable.
    Internal,
}

impl ErrorKind {
    /// Whether a client may meaningfully retry the same request later
    /// without changing anything it controls.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Conflict)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => f.write_str("validation"),
            Self::Conflict => f.write_str("conflict"),
            Self::Auth => f.write_str("auth"),
            Self::NotFound => f.write_str("not_found"),
            Self::Internal => f.write_str("internal"),
        }
    }
}
