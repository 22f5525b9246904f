//! Operation contract for Veil.
//!
//! This crate defines the transport-agnostic "language" spoken between
//! the excluded HTTP layer and the game core:
//!
//! - **Identity** ([`PlayerId`], [`RoomCode`]) — who and where.
//! - **Game vocabulary** ([`Role`], [`RoleCounts`], [`RoomStatus`]).
//! - **Views** ([`RoomView`], [`PlayerView`], [`RoundInfo`]) — pure,
//!   immutable projections of room state; the only way state leaves
//!   the core.
//! - **Receipts** ([`Admission`], [`RoundStarted`]) — results of the
//!   mutating operations, including the one-time token issuance.
//! - **Taxonomy** ([`ErrorKind`]) — the five failure classes every
//!   concrete error maps onto.
//!
//! The contract layer knows nothing about rooms' internals, sessions,
//! or concurrency — it only defines shapes.

mod error;
mod types;
mod view;

pub use error::ErrorKind;
pub use types::{PlayerId, Role, RoleCounts, RoomCode, RoomStatus};
pub use view::{Admission, PlayerView, RoomView, RoundInfo, RoundStarted};
