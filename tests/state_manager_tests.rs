//! State manager concurrency tests.
//!
//! Many producers feed one manager at once; the manager must apply
//! their mutations one at a time, in arrival order, without losing any.

use star_realms_engine::cards::InstanceId;
use star_realms_engine::core::{Counter, GameState, Mutation, Operation, PlayerId, ShuffleSource};
use star_realms_engine::session::StateManager;
use star_realms_engine::zones::Location;

const PRODUCERS: i64 = 8;
const PER_PRODUCER: i64 = 50;

fn value_of(mutation: &Mutation) -> Option<i64> {
    match mutation {
        Mutation::ChangeCounter { value, .. } => Some(*value),
        _ => None,
    }
}

/// Test that concurrent producers are serialized without loss.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_producers_are_serialized() {
    let (handle, task) = StateManager::spawn(GameState::new(50), ShuffleSource::from_seed(Some(3)), 16);

    let mut producers = Vec::new();
    for producer in 0..PRODUCERS {
        let handle = handle.clone();
        producers.push(tokio::spawn(async move {
            for i in 0..PER_PRODUCER {
                let (player, operation) = if (producer + i) % 3 == 0 {
                    (PlayerId::SECOND, Operation::Set)
                } else {
                    (PlayerId::FIRST, Operation::Increase)
                };
                let value = producer * 1000 + i;
                handle
                    .enqueue(Mutation::counter(player, Counter::Trade, operation, value))
                    .unwrap();
                tokio::task::yield_now().await;
            }
        }));
    }
    for producer in producers {
        producer.await.unwrap();
    }

    let state = handle.snapshot().await.unwrap();
    assert_eq!(state.actions.len() as i64, PRODUCERS * PER_PRODUCER);

    // Each producer's mutations keep their relative order.
    for producer in 0..PRODUCERS {
        let seen: Vec<i64> = state
            .actions
            .iter()
            .filter_map(value_of)
            .filter(|v| v / 1000 == producer)
            .collect();
        let expected: Vec<i64> = (0..PER_PRODUCER).map(|i| producer * 1000 + i).collect();
        assert_eq!(seen, expected);
    }

    // Replaying the log one at a time reproduces the state.
    let mut replay = GameState::new(50);
    let mut source = ShuffleSource::Entropy;
    for mutation in state.actions.iter().cloned() {
        replay.apply(mutation, &mut source).unwrap();
    }
    assert_eq!(replay.counters(PlayerId::FIRST), state.counters(PlayerId::FIRST));
    assert_eq!(replay.counters(PlayerId::SECOND), state.counters(PlayerId::SECOND));

    drop(handle);
    task.await.unwrap();
}

/// Test that a snapshot waits for everything queued before it.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_snapshot_sees_everything_queued_before_it() {
    let mut state = GameState::new(50);
    for n in 1..=30 {
        state.cards.place(InstanceId::new("scout", n), Location::FirstPlayerDeck);
    }
    let (handle, task) = StateManager::spawn(state, ShuffleSource::from_seed(Some(8)), 4);

    let writer = handle.clone();
    let producer = tokio::spawn(async move {
        writer.enqueue(Mutation::ShuffleDeck { location: Location::FirstPlayerDeck }).unwrap();
        for _ in 0..30 {
            writer
                .enqueue(Mutation::TopCard {
                    from: Location::FirstPlayerDeck,
                    to: Location::FirstPlayerHand,
                })
                .unwrap();
        }
        writer.snapshot().await.unwrap()
    });

    let seen = producer.await.unwrap();
    assert_eq!(seen.cards.count_in(Location::FirstPlayerHand), 30);
    assert_eq!(seen.cards.count_in(Location::FirstPlayerDeck), 0);

    drop(handle);
    let last = task.await.unwrap();
    assert_eq!(last.cards.count_in(Location::FirstPlayerHand), 30);
}

/// Test that subscribers only see published snapshots, in order.
#[tokio::test]
async fn test_snapshots_follow_get_state() {
    let (handle, task) = StateManager::spawn(GameState::new(50), ShuffleSource::Entropy, 8);
    let mut snapshots = handle.subscribe();

    handle
        .enqueue_all([
            Mutation::counter(PlayerId::FIRST, Counter::Combat, Operation::Set, 1),
            Mutation::GetState,
            Mutation::counter(PlayerId::FIRST, Counter::Combat, Operation::Set, 2),
            Mutation::counter(PlayerId::FIRST, Counter::Combat, Operation::Set, 3),
            Mutation::GetState,
        ])
        .unwrap();

    assert_eq!(snapshots.recv().await.unwrap().counters(PlayerId::FIRST).combat, 1);
    assert_eq!(snapshots.recv().await.unwrap().counters(PlayerId::FIRST).combat, 3);

    drop(handle);
    task.await.unwrap();
}

/// Test that a closed manager reports itself instead of hanging.
#[tokio::test]
async fn test_closed_manager() {
    let (handle, task) = StateManager::spawn(GameState::new(50), ShuffleSource::Entropy, 1);
    task.abort();
    let _ = task.await;

    assert!(handle.enqueue(Mutation::ChangeTurn).is_err());
    assert!(handle.snapshot().await.is_err());
    assert!(handle.is_closed());
}
