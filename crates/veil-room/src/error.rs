//! Error types for the room layer.
//!
//! Every operation on a room is total over its preconditions: each
//! precondition violation yields one specific variant here, and no
//! failure ever leaves a room half-mutated. [`RoomError::kind`] maps
//! each variant onto the shared five-class taxonomy.

use veil_protocol::{ErrorKind, PlayerId, RoomCode};
use veil_session::SessionError;

/// Errors that can occur during room operations.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// The display name is empty after trimming, or too long.
    #[error("invalid name: {0}")]
    InvalidName(&'static str),

    /// Another player in this room already uses this name
    /// (compared case-insensitively).
    #[error("the name {0:?} is already taken in this room")]
    NameTaken(String),

    /// The room configuration violates a creation invariant.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    /// The room does not exist.
    #[error("room {0} not found")]
    NotFound(RoomCode),

    /// Every seat is taken — no more players can join.
    #[error("room {0} is full")]
    RoomFull(RoomCode),

    /// Joins are rejected while a round is running.
    #[error("room {0} has a game in progress")]
    GameInProgress(RoomCode),

    /// A round is already running; it must be reset before starting again.
    #[error("room {0} has already started")]
    AlreadyStarted(RoomCode),

    /// The room isn't full yet, so a round can't start.
    #[error("room needs {expected} players to start, has {joined}")]
    IncompletePlayers {
        /// Players currently joined.
        joined: usize,
        /// The configured capacity.
        expected: usize,
    },

    /// Only the room's creator may start or reset.
    #[error("only the host may perform this operation")]
    NotHost,

    /// Role reveal requested while no round is running.
    #[error("the round has not started")]
    NotStarted,

    /// Code generation kept colliding with live rooms. Practically
    /// unreachable below ~10^9 concurrent rooms; if it fires, the
    /// process is in trouble an operator needs to see.
    #[error("room code space exhausted after {0} attempts")]
    CapacityExhausted(u32),

    /// The role deck didn't match the seat count. Unreachable given the
    /// start precondition; kept as a defensive internal check.
    #[error("role deck has {roles} roles for {players} players")]
    RoleCountMismatch {
        /// Roles in the built deck.
        roles: usize,
        /// Players to be dealt to.
        players: usize,
    },

    /// A player had no role after a successful start. Unreachable given
    /// the start invariant; surfaced rather than swallowed.
    #[error("player {0} has no role in a started round")]
    RoleMissing(PlayerId),

    /// The room's command channel is closed — its actor is gone.
    #[error("room {0} is unavailable")]
    Unavailable(RoomCode),

    /// The presented session token resolved to no player in this room.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl RoomError {
    /// Maps this error onto the shared taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidName(_) | Self::InvalidConfig(_) => ErrorKind::Validation,
            Self::NameTaken(_)
            | Self::RoomFull(_)
            | Self::GameInProgress(_)
            | Self::AlreadyStarted(_)
            | Self::IncompletePlayers { .. }
            | Self::NotStarted => ErrorKind::Conflict,
            Self::NotHost => ErrorKind::Auth,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::CapacityExhausted(_)
            | Self::RoleCountMismatch { .. }
            | Self::RoleMissing(_)
            | Self::Unavailable(_) => ErrorKind::Internal,
            Self::Session(e) => e.kind(),
        }
    }
}
