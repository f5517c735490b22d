//! Local ballot state and the single-vote-per-device policy.
//!
//! The device identity and the current vote live behind [`BallotStore`],
//! a narrow persistence seam: the production store persists through
//! `cwconfig`, tests use [`MemoryStore`]. The policy is optimistic and
//! client-side only — the backend remains authoritative.

use crate::client::VoteClient;
use crate::error::Result;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Persistence seam for the device identity and the current vote.
pub trait BallotStore: Send + Sync {
    /// Stable per-install device identifier, generated on first use.
    fn device_id(&self) -> Result<String>;

    /// Cover id this device currently votes for, if any.
    fn current_vote(&self) -> Option<String>;

    /// Records the cover id this device votes for.
    fn set_current_vote(&self, cover_id: &str) -> Result<()>;

    /// Forgets the local vote (the remote tally is untouched).
    fn clear_current_vote(&self) -> Result<()>;
}

/// Production store persisting through the CoverWorld configuration.
pub struct ConfigStore {
    config: Arc<cwconfig::Config>,
}

impl ConfigStore {
    pub fn new(config: Arc<cwconfig::Config>) -> Self {
        Self { config }
    }
}

impl BallotStore for ConfigStore {
    fn device_id(&self) -> Result<String> {
        Ok(self.config.get_device_id()?)
    }

    fn current_vote(&self) -> Option<String> {
        self.config.get_current_vote()
    }

    fn set_current_vote(&self, cover_id: &str) -> Result<()> {
        Ok(self.config.set_current_vote(cover_id)?)
    }

    fn clear_current_vote(&self) -> Result<()> {
        Ok(self.config.clear_current_vote()?)
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    vote: Mutex<Option<String>>,
}

impl BallotStore for MemoryStore {
    fn device_id(&self) -> Result<String> {
        Ok("test-device".to_string())
    }

    fn current_vote(&self) -> Option<String> {
        self.vote.lock().unwrap().clone()
    }

    fn set_current_vote(&self, cover_id: &str) -> Result<()> {
        *self.vote.lock().unwrap() = Some(cover_id.to_string());
        Ok(())
    }

    fn clear_current_vote(&self) -> Result<()> {
        *self.vote.lock().unwrap() = None;
        Ok(())
    }
}

/// Outcome of a cast attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum CastOutcome {
    /// The vote was submitted; the backend receipt is attached.
    Cast(serde_json::Value),
    /// This device already votes for that cover; nothing was sent.
    Unchanged,
}

/// Vote client plus local ballot state.
pub struct Ballot {
    client: VoteClient,
    store: Arc<dyn BallotStore>,
}

impl Ballot {
    pub fn new(client: VoteClient, store: Arc<dyn BallotStore>) -> Self {
        Self { client, store }
    }

    /// True if this device currently votes for `cover_id`.
    pub fn has_vote(&self, cover_id: &str) -> bool {
        self.store.current_vote().as_deref() == Some(cover_id)
    }

    /// Cover id this device currently votes for, if any.
    pub fn current_vote(&self) -> Option<String> {
        self.store.current_vote()
    }

    /// Casts a vote for `cover_id`.
    ///
    /// Voting twice for the same cover is a no-op after the first call:
    /// the second attempt returns [`CastOutcome::Unchanged`] without any
    /// network traffic. The local vote is only persisted once the backend
    /// accepted the submission.
    pub async fn cast(&self, cover_id: &str) -> Result<CastOutcome> {
        if self.has_vote(cover_id) {
            return Ok(CastOutcome::Unchanged);
        }

        let device_id = self.store.device_id()?;
        let receipt = self.client.vote(&device_id, cover_id).await?;
        self.store.set_current_vote(cover_id)?;
        info!(cover_id, "Vote recorded");
        Ok(CastOutcome::Cast(receipt))
    }

    /// Forgets the local vote only.
    pub fn clear_local(&self) -> Result<()> {
        self.store.clear_current_vote()
    }

    /// Fetches the raw results from the backend.
    pub async fn results(&self) -> Result<Vec<crate::models::CoverVotes>> {
        self.client.results().await
    }
}
