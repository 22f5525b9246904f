//! # Veil
//!
//! Game-room core for a social deduction game: ephemeral lobbies joined
//! by code, host-controlled rounds, and secretly, fairly assigned roles.
//!
//! The crate exposes one object, [`GameService`], with one method per
//! logical operation. Transport (HTTP routing, static assets, polling
//! UI) is an external collaborator that maps these methods 1:1 onto
//! routes:
//!
//! | Operation | Method |
//! |---|---|
//! | createRoom | [`GameService::create_room`] |
//! | joinRoom | [`GameService::join_room`] |
//! | viewRoom | [`GameService::view_room`] |
//! | startRoom | [`GameService::start_room`] |
//! | resetRoom | [`GameService::reset_room`] |
//! | myRole | [`GameService::my_role`] |
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use veil::{GameConfig, GameService};
//!
//! # async fn run() -> Result<(), veil::VeilError> {
//! veil::telemetry::init();
//! let service = GameService::new();
//!
//! let host = service
//!     .create_room("Ana", GameConfig { total_players: 5, mafia_count: 1, angel_count: 1 })
//!     .await?;
//! let guest = service.join_room(&host.code, "Bo").await?;
//!
//! let view = service.view_room(&host.code, &guest.token).await?;
//! assert_eq!(view.joined, 2);
//! # Ok(())
//! # }
//! ```
//!
//! All state is in-memory and process-lifetime: no persistence, no
//! cross-instance scaling, no reconnection after token loss (all
//! explicit non-goals).

mod error;
mod service;
pub mod telemetry;

pub use error::VeilError;
pub use service::GameService;

// Re-export the contract and config types callers need to use the
// service without importing the sub-crates.
pub use veil_protocol::{
    Admission, ErrorKind, PlayerId, PlayerView, Role, RoleCounts, RoomCode,
    RoomStatus, RoomView, RoundInfo, RoundStarted,
};
pub use veil_room::{GameConfig, RoomError};
pub use veil_session::SessionError;
