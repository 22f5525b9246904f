//! Room configuration and its creation-time validity rules.

use serde::{Deserialize, Serialize};
use veil_protocol::RoleCounts;

use crate::RoomError;

/// Configuration for one room, fixed at creation.
///
/// The citizen count is never stored — it is always derived as
/// `total_players - mafia_count - angel_count`, so the three fields can
/// never disagree with the deck that gets dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seats in the room. The round can only start once every seat is
    /// filled.
    pub total_players: usize,

    /// Mafia roles per round. At least one.
    pub mafia_count: usize,

    /// Angel roles per round. May be zero.
    pub angel_count: usize,
}

impl GameConfig {
    /// The smallest playable room.
    pub const MIN_PLAYERS: usize = 3;

    /// Checks the creation invariants.
    ///
    /// Called exactly once, at create-room time; after that the config
    /// is immutable and never re-checked. The rules:
    ///
    /// - `total_players >= 3`
    /// - `mafia_count >= 1`
    /// - `mafia_count + angel_count < total_players`
    ///
    /// The last rule guarantees at least one Citizen. (`angel_count >= 0`
    /// holds by type — the field is unsigned.)
    pub fn validate(&self) -> Result<(), RoomError> {
        if self.total_players < Self::MIN_PLAYERS {
            return Err(RoomError::InvalidConfig(
                "a room needs at least 3 players",
            ));
        }
        if self.mafia_count < 1 {
            return Err(RoomError::InvalidConfig(
                "a round needs at least one Mafia",
            ));
        }
        // checked_add: the fields are untrusted input, and a wrapped sum
        // here would let an absurd config through.
        let special = self
            .mafia_count
            .checked_add(self.angel_count)
            .ok_or(RoomError::InvalidConfig(
                "special roles must leave room for at least one Citizen",
            ))?;
        if special >= self.total_players {
            return Err(RoomError::InvalidConfig(
                "special roles must leave room for at least one Citizen",
            ));
        }
        Ok(())
    }

    /// Citizens per round, derived. Only meaningful on a validated
    /// config (otherwise the subtraction could wrap).
    pub fn citizen_count(&self) -> usize {
        self.total_players
            .saturating_sub(self.mafia_count)
            .saturating_sub(self.angel_count)
    }

    /// The public role breakdown shown in every room view.
    pub fn role_counts(&self) -> RoleCounts {
        RoleCounts {
            mafia: self.mafia_count,
            angels: self.angel_count,
            citizens: self.citizen_count(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_players: 5,
            mafia_count: 1,
            angel_count: 1,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
