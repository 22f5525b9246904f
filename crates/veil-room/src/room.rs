//! The `Room` entity and its lifecycle operations.
//!
//! Everything here is pure, synchronous logic: admission control, the
//! Waiting ↔ Started state machine, role assignment, and the public
//! projection. Serialization of access (one writer per room) is the
//! actor's job — see `actor.rs`. Keeping the rules free of channels and
//! locks means every invariant is testable with a bare `Room` value.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use veil_protocol::{
    Admission, PlayerId, PlayerView, Role, RoomCode, RoomStatus, RoomView, RoundInfo,
    RoundStarted,
};
use veil_session::{Credentialed, SessionToken};

use crate::{GameConfig, RoomError, roles};

/// Maximum display-name length in characters, after trimming.
const MAX_NAME_CHARS: usize = 32;

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// One participant, exclusively owned by its room.
#[derive(Debug)]
pub(crate) struct Player {
    /// Per-room id, assigned in join order. Stable, public, not a secret.
    id: PlayerId,
    /// Trimmed display name, case-insensitively unique in the room.
    name: String,
    /// `true` only for the creator, forever.
    is_host: bool,
    /// The sole credential. Issued once, never re-issued, never logged.
    token: SessionToken,
    /// `None` while waiting; exactly one role while started.
    role: Option<Role>,
}

impl Credentialed for Player {
    fn player_id(&self) -> PlayerId {
        self.id
    }

    fn token(&self) -> &SessionToken {
        &self.token
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// Round bookkeeping, present only while `Started`.
#[derive(Debug)]
struct Round {
    /// Opaque audit identifier. Not used to derive roles.
    seed: String,
    /// Unix milliseconds at the moment of start.
    started_at_ms: u64,
}

/// One game instance: a code, a fixed config, and an ordered roster.
///
/// The roster is in join order and its first entry is always the host.
/// Rooms cycle `Waiting ↔ Started` indefinitely and are never destroyed
/// (unbounded retention is a documented non-goal of the core; an idle
/// sweep would be a separate collaborator).
#[derive(Debug)]
pub(crate) struct Room {
    code: RoomCode,
    config: GameConfig,
    status: RoomStatus,
    players: Vec<Player>,
    round: Option<Round>,
    next_player_id: u64,
}

impl Room {
    /// Creates a room in `Waiting` with the host seated, returning the
    /// host's admission receipt.
    ///
    /// Validates the config and the host's name first; on any error no
    /// room comes into existence.
    pub(crate) fn create(
        code: RoomCode,
        config: GameConfig,
        host_name: &str,
    ) -> Result<(Self, Admission), RoomError> {
        config.validate()?;
        let name = clean_name(host_name)?;

        let host = Player {
            id: PlayerId(1),
            name,
            is_host: true,
            token: SessionToken::issue(),
            role: None,
        };
        let admission = Admission {
            code: code.clone(),
            player_id: host.id,
            token: host.token.expose().to_string(),
            is_host: true,
        };
        let room = Self {
            code,
            config,
            status: RoomStatus::Waiting,
            players: vec![host],
            round: None,
            next_player_id: 2,
        };
        Ok((room, admission))
    }

    /// Admits a new non-host player. Legal only while `Waiting`.
    ///
    /// The checks run in contract order: in-progress, full, name shape,
    /// name collision. Check-then-append is atomic because the actor
    /// serializes all commands for this room.
    pub(crate) fn admit(&mut self, name: &str) -> Result<Admission, RoomError> {
        if !self.status.is_joinable() {
            return Err(RoomError::GameInProgress(self.code.clone()));
        }
        if self.players.len() >= self.config.total_players {
            return Err(RoomError::RoomFull(self.code.clone()));
        }
        let name = clean_name(name)?;
        // Full Unicode folding, not just ASCII: "José" and "JOSÉ" are
        // the same player name.
        let folded = name.to_lowercase();
        if self
            .players
            .iter()
            .any(|p| p.name.to_lowercase() == folded)
        {
            return Err(RoomError::NameTaken(name));
        }

        let player = Player {
            id: PlayerId(self.next_player_id),
            name,
            is_host: false,
            token: SessionToken::issue(),
            role: None,
        };
        self.next_player_id += 1;
        let admission = Admission {
            code: self.code.clone(),
            player_id: player.id,
            token: player.token.expose().to_string(),
            is_host: false,
        };
        self.players.push(player);

        tracing::info!(
            room = %self.code,
            player = %admission.player_id,
            joined = self.players.len(),
            expected = self.config.total_players,
            "player joined"
        );
        Ok(admission)
    }

    /// Starts a round: host only, `Waiting` only, full room only.
    ///
    /// Deals a freshly shuffled role deck onto the roster in join order,
    /// stamps the start time, and mints the round seed. The seed is
    /// generated *after* the deal and plays no part in it — reconstructing
    /// the shuffle from the seed is impossible because the two are
    /// independent draws.
    pub(crate) fn start(&mut self, requester: PlayerId) -> Result<RoundStarted, RoomError> {
        self.require_host(requester)?;
        if self.status.is_started() {
            return Err(RoomError::AlreadyStarted(self.code.clone()));
        }
        if self.players.len() != self.config.total_players {
            return Err(RoomError::IncompletePlayers {
                joined: self.players.len(),
                expected: self.config.total_players,
            });
        }

        let deck = roles::deal(&self.config, self.players.len())?;
        for (player, role) in self.players.iter_mut().zip(deck) {
            player.role = Some(role);
        }

        let round = Round {
            seed: fresh_round_seed(),
            started_at_ms: now_ms(),
        };
        let started = RoundStarted {
            started_at_ms: round.started_at_ms,
            round_seed: round.seed.clone(),
        };
        self.round = Some(round);
        self.status = RoomStatus::Started;

        tracing::info!(
            room = %self.code,
            round_seed = %started.round_seed,
            players = self.players.len(),
            "round started"
        );
        Ok(started)
    }

    /// Resets to the lobby: host only, legal in any status.
    ///
    /// Clears every role and the round metadata. The roster and every
    /// session token survive — nobody has to rejoin.
    pub(crate) fn reset(&mut self, requester: PlayerId) -> Result<(), RoomError> {
        self.require_host(requester)?;

        for player in &mut self.players {
            player.role = None;
        }
        self.round = None;
        self.status = RoomStatus::Waiting;

        tracing::info!(room = %self.code, "room reset to waiting");
        Ok(())
    }

    /// Builds the public projection for one requesting player.
    ///
    /// Pure: no state change, and no role ever appears in the output.
    pub(crate) fn view(&self, viewer: PlayerId) -> RoomView {
        RoomView {
            code: self.code.clone(),
            status: self.status,
            joined: self.players.len(),
            expected: self.config.total_players,
            roles: self.config.role_counts(),
            can_start: self.status.is_joinable()
                && self.players.len() == self.config.total_players,
            players: self
                .players
                .iter()
                .map(|p| PlayerView {
                    id: p.id,
                    name: p.name.clone(),
                    is_host: p.is_host,
                    is_you: p.id == viewer,
                })
                .collect(),
            round: self.round.as_ref().map(|r| RoundInfo {
                started_at_ms: r.started_at_ms,
                round_seed: r.seed.clone(),
            }),
        }
    }

    /// Reveals the requester's own role. Legal only while `Started`.
    ///
    /// A started room in which the requester holds no role violates the
    /// start invariant; that case surfaces as an internal error instead
    /// of being papered over.
    pub(crate) fn role_of(&self, requester: PlayerId) -> Result<Role, RoomError> {
        if !self.status.is_started() {
            return Err(RoomError::NotStarted);
        }
        self.players
            .iter()
            .find(|p| p.id == requester)
            .and_then(|p| p.role)
            .ok_or(RoomError::RoleMissing(requester))
    }

    /// Resolves a presented session token to a player id by scanning the
    /// roster.
    pub(crate) fn authenticate(&self, presented: &str) -> Result<PlayerId, RoomError> {
        Ok(veil_session::resolve(&self.players, presented)?.player_id())
    }

    pub(crate) fn code(&self) -> &RoomCode {
        &self.code
    }

    fn require_host(&self, requester: PlayerId) -> Result<(), RoomError> {
        let host_id = self.players.first().map(|p| p.id);
        if host_id != Some(requester) {
            tracing::debug!(
                room = %self.code,
                requester = %requester,
                "non-host attempted a host-only operation"
            );
            return Err(RoomError::NotHost);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Trims and length-checks a display name.
fn clean_name(raw: &str) -> Result<String, RoomError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(RoomError::InvalidName("name must not be empty"));
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(RoomError::InvalidName("name is too long"));
    }
    Ok(name.to_string())
}

/// Mints the round's opaque audit identifier: 16 hex chars, random,
/// independent of the role shuffle.
fn fresh_round_seed() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 8] = rng.random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Wall-clock milliseconds since the Unix epoch.
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

// =========================================================================
// Tests
// =========================================================================
