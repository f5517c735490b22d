use cwvote::{Ballot, BallotStore, CastOutcome, MemoryStore, VoteClient};
use std::sync::Arc;

/// Client pointing at a dead endpoint: any network attempt fails fast.
fn offline_client() -> VoteClient {
    VoteClient::builder()
        .base_url("http://127.0.0.1:9/functions/v1")
        .timeout(std::time::Duration::from_millis(200))
        .build()
        .unwrap()
}

#[tokio::test]
async fn casting_twice_for_the_same_cover_is_a_local_noop() {
    let store = Arc::new(MemoryStore::default());
    store.set_current_vote("2024_05_MAY").unwrap();

    let ballot = Ballot::new(offline_client(), store);

    // The vote already exists locally: no network call happens, so the
    // dead endpoint is never noticed and the local vote is unchanged.
    let outcome = ballot.cast("2024_05_MAY").await.unwrap();
    assert_eq!(outcome, CastOutcome::Unchanged);
    assert_eq!(ballot.current_vote(), Some("2024_05_MAY".to_string()));
}

#[tokio::test]
async fn failed_cast_does_not_persist_a_vote() {
    let store = Arc::new(MemoryStore::default());
    let ballot = Ballot::new(offline_client(), store);

    let result = ballot.cast("2024_06_JUN").await;
    assert!(result.is_err());
    // The local vote is only recorded once the backend accepted it.
    assert_eq!(ballot.current_vote(), None);
}

#[tokio::test]
async fn clearing_forgets_the_local_vote_only() {
    let store = Arc::new(MemoryStore::default());
    store.set_current_vote("2024_05_MAY").unwrap();
    let ballot = Ballot::new(offline_client(), store);

    assert!(ballot.has_vote("2024_05_MAY"));
    ballot.clear_local().unwrap();
    assert!(!ballot.has_vote("2024_05_MAY"));
    assert_eq!(ballot.current_vote(), None);
}
