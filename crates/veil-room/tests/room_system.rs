//! Integration tests for the room system: registry, actors, and the
//! full lobby → round → lobby cycle driven through `RoomHandle`s.

use veil_protocol::{Admission, Role, RoomStatus};
use veil_room::{GameConfig, RoomError, RoomHandle, RoomRegistry};

// =========================================================================
// Helpers
// =========================================================================

fn config(total: usize, mafia: usize, angels: usize) -> GameConfig {
    GameConfig {
        total_players: total,
        mafia_count: mafia,
        angel_count: angels,
    }
}

/// Creates a room and returns its handle plus the host's admission.
fn create_room(
    registry: &mut RoomRegistry,
    cfg: GameConfig,
    host: &str,
) -> (RoomHandle, Admission) {
    let admission = registry.create(cfg, host).expect("valid create");
    let handle = registry.lookup(&admission.code).expect("just created");
    (handle, admission)
}

/// Joins `names` one by one, returning their admissions.
async fn join_all(handle: &RoomHandle, names: &[&str]) -> Vec<Admission> {
    let mut admissions = Vec::with_capacity(names.len());
    for name in names {
        admissions.push(handle.join(name).await.expect("seat free"));
    }
    admissions
}

// =========================================================================
// Lifecycle through handles
// =========================================================================

#[tokio::test]
async fn test_full_round_trip_create_join_start_reveal_reset() {
    let mut registry = RoomRegistry::new();
    let (room, host) = create_room(&mut registry, config(5, 1, 1), "Ana");

    // Four more players fill the room; can_start flips on the last join.
    let guests = join_all(&room, &["Bo", "Cy", "Dee", "Evy"]).await;
    let view = room.view(&host.token).await.expect("valid session");
    assert_eq!(view.joined, 5);
    assert!(view.can_start);

    // Start deals exactly {Mafia×1, Angel×1, Citizen×3} across the five.
    let started = room.start(&host.token).await.expect("room full");
    assert_eq!(started.round_seed.len(), 16);

    let mut tally = (0, 0, 0);
    for token in std::iter::once(&host.token).chain(guests.iter().map(|g| &g.token)) {
        match room.my_role(token).await.expect("role assigned") {
            Role::Mafia => tally.0 += 1,
            Role::Angel => tally.1 += 1,
            Role::Citizen => tally.2 += 1,
        }
    }
    assert_eq!(tally, (1, 1, 3));

    // Reset: roster intact, still full, roles gone.
    room.reset(&host.token).await.expect("host");
    let view = room.view(&host.token).await.expect("valid session");
    assert_eq!(view.status, RoomStatus::Waiting);
    assert!(view.can_start, "room is still full after reset");
    assert!(view.round.is_none());

    let result = room.my_role(&host.token).await;
    assert!(matches!(result, Err(RoomError::NotStarted)));
}

#[tokio::test]
async fn test_join_after_start_rejected_until_reset() {
    let mut registry = RoomRegistry::new();
    let (room, host) = create_room(&mut registry, config(3, 1, 0), "Ana");
    join_all(&room, &["Bo", "Cy"]).await;
    room.start(&host.token).await.expect("room full");

    let result = room.join("Dee").await;
    assert!(matches!(result, Err(RoomError::GameInProgress(_))));

    // After reset the room is Waiting again but still full.
    room.reset(&host.token).await.expect("host");
    let result = room.join("Dee").await;
    assert!(matches!(result, Err(RoomError::RoomFull(_))));
}

#[tokio::test]
async fn test_start_requires_host_token() {
    let mut registry = RoomRegistry::new();
    let (room, _host) = create_room(&mut registry, config(3, 1, 0), "Ana");
    let guests = join_all(&room, &["Bo", "Cy"]).await;

    let result = room.start(&guests[0].token).await;
    assert!(matches!(result, Err(RoomError::NotHost)));

    let result = room.reset(&guests[1].token).await;
    assert!(matches!(result, Err(RoomError::NotHost)));
}

#[tokio::test]
async fn test_operations_with_unknown_token_return_invalid_session() {
    let mut registry = RoomRegistry::new();
    let (room, _host) = create_room(&mut registry, config(5, 1, 1), "Ana");
    let bogus = "00000000000000000000000000000000";

    assert!(matches!(
        room.view(bogus).await,
        Err(RoomError::Session(_))
    ));
    assert!(matches!(
        room.start(bogus).await,
        Err(RoomError::Session(_))
    ));
    assert!(matches!(
        room.my_role(bogus).await,
        Err(RoomError::Session(_))
    ));
}

#[tokio::test]
async fn test_tokens_are_scoped_to_their_room() {
    let mut registry = RoomRegistry::new();
    let (_room_a, host_a) = create_room(&mut registry, config(5, 1, 1), "Ana");
    let (room_b, _host_b) = create_room(&mut registry, config(5, 1, 1), "Max");

    let result = room_b.view(&host_a.token).await;
    assert!(matches!(result, Err(RoomError::Session(_))));
}

// =========================================================================
// Concurrency
// =========================================================================

#[tokio::test]
async fn test_concurrent_joins_never_overrun_capacity() {
    // Ten players race for the two free seats of a three-seat room.
    // The actor serializes admissions, so exactly two may win and the
    // roster must never exceed capacity.
    let mut registry = RoomRegistry::new();
    let (room, host) = create_room(&mut registry, config(3, 1, 0), "Ana");

    let mut tasks = Vec::new();
    for i in 0..10 {
        let handle = room.clone();
        tasks.push(tokio::spawn(async move {
            handle.join(&format!("racer{i}")).await
        }));
    }

    let mut admitted = 0;
    let mut rejected_full = 0;
    for task in tasks {
        match task.await.expect("task panicked") {
            Ok(_) => admitted += 1,
            Err(RoomError::RoomFull(_)) => rejected_full += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(admitted, 2);
    assert_eq!(rejected_full, 8);

    let view = room.view(&host.token).await.expect("valid session");
    assert_eq!(view.joined, 3);
}

#[tokio::test]
async fn test_concurrent_starts_exactly_one_wins() {
    // The host double-clicks: both requests race, the actor serializes
    // them, and the loser sees AlreadyStarted rather than a second deal.
    let mut registry = RoomRegistry::new();
    let (room, host) = create_room(&mut registry, config(3, 1, 0), "Ana");
    join_all(&room, &["Bo", "Cy"]).await;

    let (a, b) = tokio::join!(room.start(&host.token), room.start(&host.token));

    let outcomes = [a, b];
    let wins = outcomes.iter().filter(|r| r.is_ok()).count();
    let already = outcomes
        .iter()
        .filter(|r| matches!(r, Err(RoomError::AlreadyStarted(_))))
        .count();
    assert_eq!((wins, already), (1, 1));
}

// =========================================================================
// Assignment fairness across cycles
// =========================================================================

#[tokio::test]
async fn test_repeated_cycles_reassign_roles_independently() {
    // 300 reset/start cycles on a 3-seat room with one Mafia. Each seat
    // should draw Mafia about 100 times (σ ≈ 8.2); ±60 is over seven
    // sigma, so a failure here means correlated deals, not noise.
    const CYCLES: usize = 300;

    let mut registry = RoomRegistry::new();
    let (room, host) = create_room(&mut registry, config(3, 1, 0), "Ana");
    let guests = join_all(&room, &["Bo", "Cy"]).await;
    let tokens = [&host.token, &guests[0].token, &guests[1].token];

    let mut mafia_hits = [0usize; 3];
    for _ in 0..CYCLES {
        room.start(&host.token).await.expect("room full");
        for (seat, token) in tokens.iter().enumerate() {
            if room.my_role(token).await.expect("role assigned") == Role::Mafia {
                mafia_hits[seat] += 1;
            }
        }
        room.reset(&host.token).await.expect("host");
    }

    assert_eq!(mafia_hits.iter().sum::<usize>(), CYCLES);
    for (seat, hits) in mafia_hits.iter().enumerate() {
        assert!(
            (40..=160).contains(hits),
            "seat {seat} drew mafia {hits} times in {CYCLES} cycles"
        );
    }
}
