//! Room registry: generates codes, creates rooms, and resolves lookups.
//!
//! The registry is the single source of truth for room existence. It is
//! an explicit object constructed at process start and handed to the
//! service by reference — never ambient static state — so tests can run
//! any number of independent registries side by side.

use std::collections::HashMap;

use rand::Rng;
use veil_protocol::{Admission, RoomCode};

use crate::{GameConfig, RoomError, RoomHandle, actor::spawn_room, room::Room};

/// Characters a room code may contain: a 32-symbol alphabet with the
/// visually ambiguous `0`, `O`, `1`, and `I` removed, so codes survive
/// being read aloud or scribbled on a whiteboard.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Characters per room code. 32^6 ≈ 1.07 × 10^9 possible codes — enough
/// that guessing a live room within a game session is impractical.
pub const CODE_LENGTH: usize = 6;

/// How many collisions `create` tolerates before giving up.
const MAX_CODE_ATTEMPTS: u32 = 50;

/// Command channel size for each room actor.
const DEFAULT_CHANNEL_SIZE: usize = 64;

/// Generates one random room code.
///
/// Every character is drawn independently and uniformly from
/// [`CODE_ALPHABET`] using the OS-seeded ChaCha CSPRNG, so codes are
/// guessing-resistant as well as unique.
pub fn generate_code() -> RoomCode {
    let mut rng = rand::rng();
    let code: String = (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            char::from(CODE_ALPHABET[idx])
        })
        .collect();
    RoomCode::new(code)
}

/// Returns `true` if `code` has the shape the generator produces.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH
        && code.bytes().all(|b| CODE_ALPHABET.contains(&b))
}

/// Owns the code → room mapping for one process.
///
/// Not thread-safe by itself — like the rest of the core it is plain
/// single-writer state, wrapped in a lock by the service layer. The
/// lock is only ever held for map operations; room traffic goes through
/// cloned [`RoomHandle`]s outside it.
pub struct RoomRegistry {
    /// Live rooms, keyed by code. Entries are never removed (unbounded
    /// retention is a documented non-goal; an idle-expiry sweep would be
    /// a separate collaborator, not part of the lifecycle).
    rooms: HashMap<RoomCode, RoomHandle>,
}

impl RoomRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            rooms: HashMap::new(),
        }
    }

    /// Creates a room: validates the config, allocates a unique code,
    /// spawns the room actor with the host seated, and returns the
    /// host's admission receipt.
    ///
    /// # Errors
    ///
    /// - [`RoomError::InvalidConfig`] / [`RoomError::InvalidName`] —
    ///   nothing is allocated.
    /// - [`RoomError::CapacityExhausted`] — code generation collided
    ///   [`MAX_CODE_ATTEMPTS`] times. Operator-visible, not a
    ///   user-retryable condition.
    pub fn create(
        &mut self,
        config: GameConfig,
        host_name: &str,
    ) -> Result<Admission, RoomError> {
        let code = self.allocate_code()?;
        let (room, admission) = Room::create(code.clone(), config, host_name)?;
        let handle = spawn_room(room, DEFAULT_CHANNEL_SIZE);
        self.rooms.insert(code, handle);

        tracing::info!(
            room = %admission.code,
            rooms_live = self.rooms.len(),
            "room created"
        );
        Ok(admission)
    }

    /// Resolves a code to its room handle.
    pub fn lookup(&self, code: &RoomCode) -> Result<RoomHandle, RoomError> {
        self.rooms
            .get(code)
            .cloned()
            .ok_or_else(|| RoomError::NotFound(code.clone()))
    }

    /// Number of live rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Draws codes until one misses the live set, bounded by
    /// [`MAX_CODE_ATTEMPTS`].
    fn allocate_code(&self) -> Result<RoomCode, RoomError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code();
            if !self.rooms.contains_key(&code) {
                return Ok(code);
            }
        }
        tracing::error!(
            rooms_live = self.rooms.len(),
            attempts = MAX_CODE_ATTEMPTS,
            "room code space exhausted"
        );
        Err(RoomError::CapacityExhausted(MAX_CODE_ATTEMPTS))
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_code_has_valid_shape() {
        for _ in 0..200 {
            let code = generate_code();
            assert!(
                is_valid_code(code.as_str()),
                "generated code {code} violates the format"
            );
        }
    }

    #[test]
    fn test_code_alphabet_has_32_unambiguous_symbols() {
        assert_eq!(CODE_ALPHABET.len(), 32);
        for banned in [b'0', b'O', b'1', b'I'] {
            assert!(
                !CODE_ALPHABET.contains(&banned),
                "ambiguous symbol {} in alphabet",
                char::from(banned)
            );
        }
    }

    #[test]
    fn test_is_valid_code_rejects_bad_shapes() {
        assert!(is_valid_code("ABCDEF"));
        assert!(!is_valid_code("ABCDE"));
        assert!(!is_valid_code("ABCDEFG"));
        assert!(!is_valid_code("ABCDE0")); // ambiguous symbol
        assert!(!is_valid_code("abcdef")); // lowercase is not in the alphabet
    }

    #[tokio::test]
    async fn test_create_registers_room_under_fresh_code() {
        let mut registry = RoomRegistry::new();

        let admission = registry
            .create(GameConfig::default(), "Ana")
            .expect("valid create");

        assert!(is_valid_code(admission.code.as_str()));
        assert!(admission.is_host);
        assert_eq!(registry.room_count(), 1);
        assert!(registry.lookup(&admission.code).is_ok());
    }

    #[tokio::test]
    async fn test_create_codes_are_unique_across_live_rooms() {
        let mut registry = RoomRegistry::new();
        let mut seen = std::collections::HashSet::new();

        for _ in 0..100 {
            let admission = registry
                .create(GameConfig::default(), "Ana")
                .expect("valid create");
            assert!(
                seen.insert(admission.code.clone()),
                "duplicate code {}",
                admission.code
            );
        }
        assert_eq!(registry.room_count(), 100);
    }

    #[tokio::test]
    async fn test_create_invalid_config_registers_nothing() {
        let mut registry = RoomRegistry::new();
        let bad = GameConfig {
            total_players: 2,
            mafia_count: 1,
            angel_count: 0,
        };

        let result = registry.create(bad, "Ana");

        assert!(matches!(result, Err(RoomError::InvalidConfig(_))));
        assert_eq!(registry.room_count(), 0);
    }

    #[tokio::test]
    async fn test_create_invalid_host_name_registers_nothing() {
        let mut registry = RoomRegistry::new();

        let result = registry.create(GameConfig::default(), "  ");

        assert!(matches!(result, Err(RoomError::InvalidName(_))));
        assert_eq!(registry.room_count(), 0);
    }

    #[test]
    fn test_lookup_unknown_code_returns_not_found() {
        let registry = RoomRegistry::new();

        let result = registry.lookup(&RoomCode::new("ZZZZZZ"));

        assert!(matches!(result, Err(RoomError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_independent_registries_do_not_share_rooms() {
        // The registry is an explicit object, not process-global state:
        // a code from one registry means nothing to another.
        let mut a = RoomRegistry::new();
        let b = RoomRegistry::new();

        let admission = a
            .create(GameConfig::default(), "Ana")
            .expect("valid create");

        assert!(a.lookup(&admission.code).is_ok());
        assert!(matches!(
            b.lookup(&admission.code),
            Err(RoomError::NotFound(_))
        ));
    }
}
