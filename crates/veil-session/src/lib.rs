//! Session credentials for Veil.
//!
//! This crate handles the identity side of the game core:
//!
//! 1. **Issuance** — minting high-entropy secret tokens
//!    ([`SessionToken::issue`]), done exactly once per player at
//!    create/join time.
//! 2. **Resolution** — turning a presented token back into a player by
//!    scanning the room's roster ([`resolve`] over the [`Credentialed`]
//!    seam).
//!
//! # How it fits in the stack
//!
//! ```text
//! Room layer (above)   ← owns players, calls resolve() before every op
//!     ↕
//! Session layer (this) ← mints and matches tokens, knows no game rules
//!     ↕
//! Contract layer (below) ← provides PlayerId, ErrorKind
//! ```
//!
//! There is deliberately no session store here: the roster *is* the
//! store, and a token's lifetime is exactly its room's lifetime.

mod auth;
mod error;
mod token;

pub use auth::{Credentialed, resolve};
pub use error::SessionError;
pub use token::SessionToken;
