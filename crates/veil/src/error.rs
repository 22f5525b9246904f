//! Unified error type for the Veil facade.

use veil_protocol::ErrorKind;
use veil_room::RoomError;
use veil_session::SessionError;

/// Top-level error that wraps all crate-specific errors.
///
/// Callers of [`GameService`](crate::GameService) deal with this single
/// type; `?` converts sub-crate errors automatically via the `#[from]`
/// impls. [`kind`](Self::kind) delegates to the source, so the HTTP
/// collaborator can map any failure to a status code without matching
/// concrete variants.
#[derive(Debug, thiserror::Error)]
pub enum VeilError {
    /// A room-level error (lifecycle, registry, role assignment).
    #[error(transparent)]
    Room(#[from] RoomError),

    /// A session-level error (token resolution).
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl VeilError {
    /// Maps this error onto the shared taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Room(e) => e.kind(),
            Self::Session(e) => e.kind(),
        }
    }
}
