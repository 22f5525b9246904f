//! Core contract types shared by every layer of Veil.
//!
//! These are the structures the HTTP collaborator maps 1:1 onto request
//! and response bodies. They carry no behavior beyond construction and
//! formatting — all game rules live in `veil-room`.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A player's identifier, unique within one room.
///
/// This is a newtype wrapper around `u64` so a player id can't be
/// confused with any other number in a signature. It is assigned by the
/// room in join order, is stable for the room's life, and is **not** a
/// secret — clients use it only to answer "is this entry me?". The
/// session token is the credential, never this.
///
/// `#[serde(transparent)]` serializes `PlayerId(3)` as plain `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{}", self.0)
    }
}

/// A room's short, human-typable join code.
///
/// Codes are six characters drawn from a 32-symbol alphabet that excludes
/// the visually ambiguous `0`, `O`, `1`, and `I`, and are generated from
/// a cryptographically secure source (see `veil-room`'s registry). The
/// code is immutable once the room is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCode(String);

impl RoomCode {
    /// Wraps an already-generated code string.
    ///
    /// Construction of *new* codes belongs to the room registry; this
    /// exists so callers can name a room they already know about.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// A secret role dealt to a player when a round starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The informed minority. At least one per round.
    Mafia,
    /// The protector. Zero or more per round.
    Angel,
    /// The uninformed majority. The config invariant guarantees at
    /// least one.
    Citizen,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mafia => f.write_str("Mafia"),
            Self::Angel => f.write_str("Angel"),
            Self::Citizen => f.write_str("Citizen"),
        }
    }
}

/// How many of each role a round deals. Derived from the room config;
/// public information shown in every room view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    /// Number of Mafia roles.
    pub mafia: usize,
    /// Number of Angel roles.
    pub angels: usize,
    /// Number of Citizen roles.
    pub citizens: usize,
}

impl RoleCounts {
    /// Total number of roles — always equals the room's player capacity.
    pub fn total(&self) -> usize {
        self.mafia + self.angels + self.citizens
    }
}

// ---------------------------------------------------------------------------
// RoomStatus
// ---------------------------------------------------------------------------

/// The lifecycle state of a room.
///
/// Two states, cycling indefinitely — there is no terminal state:
///
/// ```text
/// Waiting ──(start)──→ Started
///    ↑                    │
///    └──────(reset)───────┘
/// ```
///
/// - **Waiting**: the lobby. Joins are admitted, no player has a role.
/// - **Started**: a round is live. Every seat is filled, every player
///   holds exactly one secret role, joins are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    Waiting,
    Started,
}

impl RoomStatus {
    /// Returns `true` if the room is accepting new players.
    pub fn is_joinable(&self) -> bool {
        matches!(self, Self::Waiting)
    }

    /// Returns `true` if a round is in progress.
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started)
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waiting => f.write_str("Waiting"),
            Self::Started => f.write_str("Started"),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
