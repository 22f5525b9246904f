//! Immutable projection types returned by room operations.
//!
//! A view is built fresh by a pure function from the room entity — never
//! by serializing internal state and re-parsing it. Views carry only
//! public information: a `RoomView` never contains any player's role,
//! no matter whose session requested it. The single exception to role
//! secrecy is the dedicated role-reveal operation, which returns the
//! requester's own role and nothing else.

use serde::{Deserialize, Serialize};

use crate::{PlayerId, RoleCounts, RoomCode, RoomStatus};

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// One entry in the public player list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// The player's per-room id.
    pub id: PlayerId,
    /// Display name, as stored (trimmed at join time).
    pub name: String,
    /// Whether this player created the room.
    pub is_host: bool,
    /// Whether this entry is the requesting session's own player.
    pub is_you: bool,
}

/// Round metadata, present only while the room is `Started`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundInfo {
    /// Unix timestamp in milliseconds of the moment the round started.
    pub started_at_ms: u64,
    /// Opaque audit identifier for this round. It is *not* a secret and
    /// roles are *not* derived from it — assignment is independently
    /// random, so knowing the seed reveals nothing.
    pub round_seed: String,
}

/// The public snapshot of a room, tailored to one requesting session
/// (only the `is_you` flags differ between requesters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomView {
    /// The room's join code.
    pub code: RoomCode,
    /// Current lifecycle status.
    pub status: RoomStatus,
    /// Number of players who have joined so far.
    pub joined: usize,
    /// Number of players the room was configured for.
    pub expected: usize,
    /// The role breakdown this room deals each round.
    pub roles: RoleCounts,
    /// `true` when the room is full and waiting — the host's start
    /// button lights up on this.
    pub can_start: bool,
    /// All joined players, in join order (first entry is the host).
    pub players: Vec<PlayerView>,
    /// Round metadata; `None` while waiting.
    pub round: Option<RoundInfo>,
}

// ---------------------------------------------------------------------------
// Receipts
// ---------------------------------------------------------------------------

/// The result of creating or joining a room: the one and only time a
/// session token is handed out. Clients must persist the whole tuple —
/// tokens are never re-issued (reconnect-after-loss is a non-goal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admission {
    /// The room's join code.
    pub code: RoomCode,
    /// The admitted player's id.
    pub player_id: PlayerId,
    /// The secret session token — the sole credential for every later
    /// operation on this room.
    pub token: String,
    /// `true` for the creator, `false` for everyone who joined.
    pub is_host: bool,
}

/// The result of a successful start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStarted {
    /// Unix timestamp in milliseconds of the start.
    pub started_at_ms: u64,
    /// The round's opaque audit identifier.
    pub round_seed: String,
}

// =========================================================================
// Tests
// =========================================================================
