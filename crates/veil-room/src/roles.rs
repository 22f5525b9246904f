//! Secret role assignment.
//!
//! The assigner builds the exact role multiset a config calls for and
//! shuffles it with a cryptographically secure RNG. The caller zips the
//! shuffled deck onto the player list in join order, so fairness lives
//! entirely in the shuffle: every permutation of the deck is equally
//! likely, and nothing public (join order, player ids, the round seed)
//! predicts who draws what.

use rand::seq::SliceRandom;
use veil_protocol::Role;

use crate::{GameConfig, RoomError};

/// Builds the unshuffled role deck: `mafia_count` Mafia, `angel_count`
/// Angel, and Citizens for the remaining seats.
fn build_deck(config: &GameConfig) -> Vec<Role> {
    let mut deck = Vec::with_capacity(config.total_players);
    deck.extend(std::iter::repeat_n(Role::Mafia, config.mafia_count));
    deck.extend(std::iter::repeat_n(Role::Angel, config.angel_count));
    deck.extend(std::iter::repeat_n(Role::Citizen, config.citizen_count()));
    deck
}

/// Deals a shuffled role deck for `seats` players.
///
/// The shuffle is a Fisher-Yates pass (`SliceRandom::shuffle`) driven by
/// `rand::rng()`, the OS-seeded ChaCha CSPRNG. Swap indices are sampled
/// uniformly over the inclusive remaining range, so there is no modulo
/// bias and the resulting permutation is uniform over all orderings of
/// the multiset — unpredictable in advance and unreconstructable
/// afterwards from public information.
///
/// # Errors
///
/// Returns [`RoomError::RoleCountMismatch`] if the deck size does not
/// equal `seats`. The caller guarantees the room is full before dealing,
/// so this firing means a broken internal invariant, not a user mistake.
pub(crate) fn deal(config: &GameConfig, seats: usize) -> Result<Vec<Role>, RoomError> {
    let mut deck = build_deck(config);
    if deck.len() != seats {
        return Err(RoomError::RoleCountMismatch {
            roles: deck.len(),
            players: seats,
        });
    }
    deck.shuffle(&mut rand::rng());
    Ok(deck)
}

// =========================================================================
// Tests
// =========================================================================
