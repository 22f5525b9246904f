//! Room lifecycle, registry, and secret role assignment for Veil.
//!
//! This is the core of the system: everything that needs real
//! correctness guarantees lives here.
//!
//! - [`GameConfig`] — room shape, validated once at creation.
//! - [`RoomRegistry`] — code generation and the code → room mapping;
//!   the single source of truth for room existence.
//! - [`RoomHandle`] — the only way to talk to a room. Each room runs as
//!   an isolated Tokio task (actor model); its command channel is the
//!   per-room serialization scope that makes admission, start, and
//!   reset atomic.
//! - Role assignment happens inside `start`: an exact role multiset,
//!   Fisher-Yates shuffled with a CSPRNG, zipped onto the roster in
//!   join order.
//! - [`RoomError`] — every way an operation can fail, each mapping onto
//!   the shared error taxonomy via [`RoomError::kind`].
//!
//! All state is in-memory and process-lifetime; rooms are never
//! destroyed (a documented non-goal, not an oversight).

mod actor;
mod config;
mod error;
mod registry;
mod roles;
mod room;

pub use actor::RoomHandle;
pub use config::GameConfig;
pub use error::RoomError;
pub use registry::{CODE_ALPHABET, CODE_LENGTH, RoomRegistry, generate_code, is_valid_code};
