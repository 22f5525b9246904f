//! `GameService`: the six logical operations, one method each.
//!
//! This is the seam the excluded HTTP layer calls through. Each method
//! takes plain contract inputs and returns a contract type or a
//! [`VeilError`] — no transport concepts on either side.

use tokio::sync::Mutex;
use veil_protocol::{Admission, Role, RoomCode, RoomView, RoundStarted};
use veil_room::{GameConfig, RoomHandle, RoomRegistry};

use crate::VeilError;

/// The game core behind a single handle.
///
/// Construct one per process (or per test — registries are fully
/// independent) and share it by reference across request handlers.
///
/// # Locking
///
/// The registry lock guards only the code → room map and is held just
/// long enough to create or look up an entry. All room traffic then
/// goes through the room's own actor channel, so rooms never contend
/// with each other and a slow room cannot stall the registry.
///
/// # Error ordering
///
/// For authenticated operations the room is looked up *before* the
/// token is checked, so an unknown code yields `NotFound` while a known
/// code with a bad token yields `InvalidSession`. This discloses room
/// existence distinctly from credential validity — a deliberate,
/// documented trade-off (friendlier errors for typo'd codes), not an
/// accident of ordering.
pub struct GameService {
    registry: Mutex<RoomRegistry>,
}

impl GameService {
    /// Creates a service with an empty registry.
    pub fn new() -> Self {
        tracing::debug!("game service initialized with empty registry");
        Self {
            registry: Mutex::new(RoomRegistry::new()),
        }
    }

    /// Creates a room and seats the host. Returns the host's admission
    /// receipt — the only time the host's session token is handed out.
    pub async fn create_room(
        &self,
        host_name: &str,
        config: GameConfig,
    ) -> Result<Admission, VeilError> {
        let mut registry = self.registry.lock().await;
        Ok(registry.create(config, host_name)?)
    }

    /// Joins an existing room by code. Returns the new player's
    /// admission receipt.
    pub async fn join_room(
        &self,
        code: &RoomCode,
        name: &str,
    ) -> Result<Admission, VeilError> {
        let room = self.lookup(code).await?;
        Ok(room.join(name).await?)
    }

    /// Returns the public view of a room, tailored to the session.
    pub async fn view_room(
        &self,
        code: &RoomCode,
        token: &str,
    ) -> Result<RoomView, VeilError> {
        let room = self.lookup(code).await?;
        Ok(room.view(token).await?)
    }

    /// Starts a round (host only). Returns the round receipt.
    pub async fn start_room(
        &self,
        code: &RoomCode,
        token: &str,
    ) -> Result<RoundStarted, VeilError> {
        let room = self.lookup(code).await?;
        Ok(room.start(token).await?)
    }

    /// Resets a room to the lobby (host only). The roster and all
    /// session tokens survive; the HTTP layer shapes the confirmation.
    pub async fn reset_room(
        &self,
        code: &RoomCode,
        token: &str,
    ) -> Result<(), VeilError> {
        let room = self.lookup(code).await?;
        Ok(room.reset(token).await?)
    }

    /// Reveals the requesting session's own role.
    pub async fn my_role(
        &self,
        code: &RoomCode,
        token: &str,
    ) -> Result<Role, VeilError> {
        let room = self.lookup(code).await?;
        Ok(room.my_role(token).await?)
    }

    /// Number of live rooms (operator metric).
    pub async fn room_count(&self) -> usize {
        self.registry.lock().await.room_count()
    }

    /// Resolves a code under the registry lock, releasing it before any
    /// room traffic.
    async fn lookup(&self, code: &RoomCode) -> Result<RoomHandle, VeilError> {
        Ok(self.registry.lock().await.lookup(code)?)
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
