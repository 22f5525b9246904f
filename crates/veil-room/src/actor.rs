//! Room actor: an isolated Tokio task that owns one `Room`.
//!
//! Each room runs in its own task, reached only through an mpsc channel.
//! That channel *is* the per-room mutual-exclusion scope the lifecycle
//! needs: commands are processed one at a time, so check-then-mutate
//! sequences (admission, start, reset) are atomic per room, reads are
//! sequenced relative to writes, and two rooms never contend with each
//! other.

use tokio::sync::{mpsc, oneshot};
use veil_protocol::{Admission, Role, RoomCode, RoomView, RoundStarted};

use crate::{RoomError, room::Room};

/// Commands sent to a room actor through its channel.
///
/// Joining needs no credential (it is how a credential is obtained);
/// every other command carries the presented session token, which the
/// actor resolves against its own roster before acting.
pub(crate) enum RoomCommand {
    /// Admit a new player under the given display name.
    Join {
        name: String,
        reply: oneshot::Sender<Result<Admission, RoomError>>,
    },

    /// Build the public view for the token's owner.
    View {
        token: String,
        reply: oneshot::Sender<Result<RoomView, RoomError>>,
    },

    /// Start a round (host only).
    Start {
        token: String,
        reply: oneshot::Sender<Result<RoundStarted, RoomError>>,
    },

    /// Reset to the lobby (host only).
    Reset {
        token: String,
        reply: oneshot::Sender<Result<(), RoomError>>,
    },

    /// Reveal the token owner's own role.
    MyRole {
        token: String,
        reply: oneshot::Sender<Result<Role, RoomError>>,
    },
}

/// Handle to a running room actor.
///
/// Cheap to clone — it's an `mpsc::Sender` wrapper. The registry holds
/// one per room and hands out clones, so callers never hold a registry
/// lock while talking to a room.
#[derive(Clone)]
pub struct RoomHandle {
    code: RoomCode,
    sender: mpsc::Sender<RoomCommand>,
}

impl RoomHandle {
    /// The room's join code.
    pub fn code(&self) -> &RoomCode {
        &self.code
    }

    /// Requests admission for a new player.
    pub async fn join(&self, name: &str) -> Result<Admission, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(
            RoomCommand::Join {
                name: name.to_string(),
                reply: reply_tx,
            },
            reply_rx,
        )
        .await
    }

    /// Requests the public view for the token's owner.
    pub async fn view(&self, token: &str) -> Result<RoomView, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(
            RoomCommand::View {
                token: token.to_string(),
                reply: reply_tx,
            },
            reply_rx,
        )
        .await
    }

    /// Requests a round start.
    pub async fn start(&self, token: &str) -> Result<RoundStarted, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(
            RoomCommand::Start {
                token: token.to_string(),
                reply: reply_tx,
            },
            reply_rx,
        )
        .await
    }

    /// Requests a reset to the lobby.
    pub async fn reset(&self, token: &str) -> Result<(), RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(
            RoomCommand::Reset {
                token: token.to_string(),
                reply: reply_tx,
            },
            reply_rx,
        )
        .await
    }

    /// Requests the token owner's role.
    pub async fn my_role(&self, token: &str) -> Result<Role, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(
            RoomCommand::MyRole {
                token: token.to_string(),
                reply: reply_tx,
            },
            reply_rx,
        )
        .await
    }

    /// Sends a command and awaits its reply. A closed channel in either
    /// direction means the actor is gone; both map to `Unavailable`.
    async fn send<T>(
        &self,
        cmd: RoomCommand,
        reply_rx: oneshot::Receiver<Result<T, RoomError>>,
    ) -> Result<T, RoomError> {
        self.sender
            .send(cmd)
            .await
            .map_err(|_| RoomError::Unavailable(self.code.clone()))?;
        reply_rx
            .await
            .map_err(|_| RoomError::Unavailable(self.code.clone()))?
    }
}

/// The actor state: the room plus its command inbox.
struct RoomActor {
    room: Room,
    receiver: mpsc::Receiver<RoomCommand>,
}

impl RoomActor {
    /// Processes commands until every handle is dropped.
    ///
    /// Rooms are never explicitly destroyed (a documented non-goal), so
    /// in practice this loop lives for the process lifetime.
    async fn run(mut self) {
        tracing::info!(room = %self.room.code(), "room actor started");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                RoomCommand::Join { name, reply } => {
                    let _ = reply.send(self.room.admit(&name));
                }
                RoomCommand::View { token, reply } => {
                    let result = self
                        .room
                        .authenticate(&token)
                        .map(|pid| self.room.view(pid));
                    let _ = reply.send(result);
                }
                RoomCommand::Start { token, reply } => {
                    let result = self
                        .room
                        .authenticate(&token)
                        .and_then(|pid| self.room.start(pid));
                    let _ = reply.send(result);
                }
                RoomCommand::Reset { token, reply } => {
                    let result = self
                        .room
                        .authenticate(&token)
                        .and_then(|pid| self.room.reset(pid));
                    let _ = reply.send(result);
                }
                RoomCommand::MyRole { token, reply } => {
                    let result = self
                        .room
                        .authenticate(&token)
                        .and_then(|pid| self.room.role_of(pid));
                    let _ = reply.send(result);
                }
            }
        }

        tracing::info!(room = %self.room.code(), "room actor stopped");
    }
}

/// Spawns a room actor task and returns a handle to it.
///
/// `channel_size` bounds the command queue — if it fills, senders wait.
pub(crate) fn spawn_room(room: Room, channel_size: usize) -> RoomHandle {
    let (tx, rx) = mpsc::channel(channel_size);
    let code = room.code().clone();

    let actor = RoomActor { room, receiver: rx };
    tokio::spawn(actor.run());

    RoomHandle { code, sender: tx }
}
