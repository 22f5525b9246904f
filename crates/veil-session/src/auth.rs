//! Roster-based session resolution.
//!
//! Veil has no account system and no token index: a session is resolved
//! by scanning the room's own player list for a matching token. Rooms
//! hold at most a handful of players, so the linear scan is cheaper
//! than maintaining a second map that could drift out of sync.
//!
//! The seam is the [`Credentialed`] trait rather than a concrete player
//! type — the room crate implements it for its `Player`, and tests can
//! implement it with a two-field struct.

use veil_protocol::PlayerId;

use crate::{SessionError, SessionToken};

/// Anything that holds a session credential and a player identity.
pub trait Credentialed {
    /// The per-room id of the credential's owner.
    fn player_id(&self) -> PlayerId;

    /// The owner's secret token.
    fn token(&self) -> &SessionToken;
}

/// Resolves a presented token against a room's roster.
///
/// Returns the matching entry, or [`SessionError::InvalidSession`] if no
/// entry matches. A missing, empty, or foreign-room token is
/// indistinguishable from a wrong one by design — the error never says
/// *why* the credential failed.
pub fn resolve<'a, C: Credentialed>(
    roster: &'a [C],
    presented: &str,
) -> Result<&'a C, SessionError> {
    roster
        .iter()
        .find(|entry| entry.token().matches(presented))
        .ok_or_else(|| {
            // Log the fact, never the credential.
            tracing::debug!(roster_len = roster.len(), "session token rejected");
            SessionError::InvalidSession
        })
}

// =========================================================================
// Tests
// =========================================================================
