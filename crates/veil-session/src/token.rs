//! Session tokens: the sole credential a player holds.
//!
//! A token is issued exactly once, at create/join time, and never
//! re-issued — losing it means losing the seat (reconnect-after-loss is
//! an explicit non-goal). Tokens are scoped to one room; there is no
//! cross-room identity to steal.

use std::fmt;

use rand::Rng;

/// Number of random bytes in a token (128 bits of entropy).
const TOKEN_BYTES: usize = 16;

/// A secret, high-entropy session credential.
///
/// The token is a 32-character hex string (128 bits of randomness) drawn
/// from the OS-seeded ChaCha thread RNG. 2^128 possibilities makes
/// guessing a live token computationally infeasible, so a plain
/// equality scan over a room's roster is a sound authentication check.
///
/// `Debug` is implemented by hand to print a redaction instead of the
/// secret — tokens must never reach logs, and deriving `Debug` would
/// make that a one-keystroke accident in any `tracing` call.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Issues a fresh random token.
    pub fn issue() -> Self {
        let mut rng = rand::rng();
        let bytes: [u8; TOKEN_BYTES] = rng.random();
        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// Returns the secret string for issuance responses.
    ///
    /// The deliberately loud name marks the only two legitimate call
    /// sites: filling an `Admission` receipt after create or join.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Compares against a presented credential.
    pub fn matches(&self, presented: &str) -> bool {
        self.0 == presented
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(redacted)")
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_produces_32_hex_chars() {
        let token = SessionToken::issue();
        assert_eq!(token.expose().len(), 32);
        assert!(token.expose().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_issue_tokens_are_unique() {
        // With 128 bits of entropy a collision here would indicate a
        // broken RNG, not bad luck.
        let a = SessionToken::issue();
        let b = SessionToken::issue();
        assert_ne!(a.expose(), b.expose());
    }

    #[test]
    fn test_matches_own_exposed_value() {
        let token = SessionToken::issue();
        let presented = token.expose().to_string();
        assert!(token.matches(&presented));
    }

    #[test]
    fn test_matches_rejects_other_strings() {
        let token = SessionToken::issue();
        assert!(!token.matches(""));
        assert!(!token.matches("00000000000000000000000000000000"));
    }

    #[test]
    fn test_debug_never_prints_the_secret() {
        let token = SessionToken::issue();
        let debugged = format!("{token:?}");
        assert_eq!(debugged, "SessionToken(redacted)");
        assert!(!debugged.contains(token.expose()));
    }
}
