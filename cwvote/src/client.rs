//! HTTP client for the voting backend
//!
//! The backend exposes two endpoints relative to a base URL: `POST /vote`
//! accepting `{device_id, cover_id}` and `GET /results` returning the
//! current tally. Failures are surfaced, never retried: callers catch and
//! log them.
//!
//! # Example
//!
//! ```no_run
//! use cwvote::VoteClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = VoteClient::new()?;
//!     let results = client.results().await?;
//!     for entry in results {
//!         println!("{}: {}", entry.cover_id, entry.votes);
//!     }
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::models::{CoverVotes, ResultsResponse, VoteRequest};
use reqwest::Client;
use std::time::Duration;

/// Default voting backend base URL
pub const DEFAULT_BASE_URL: &str = "https://bncnrkuvdzzcoqcnovrf.supabase.co/functions/v1";

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "CoverWorld/0.1 (cwvote)";

/// Voting backend HTTP client
///
/// The client is stateless; the single-vote-per-device policy lives in
/// [`Ballot`](crate::ballot::Ballot), not here.
#[derive(Debug, Clone)]
pub struct VoteClient {
    client: Client,
    vote_url: String,
    results_url: String,
}

impl VoteClient {
    /// Create a new client with default settings
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Vote endpoint URL
    pub fn vote_url(&self) -> &str {
        &self.vote_url
    }

    /// Results endpoint URL
    pub fn results_url(&self) -> &str {
        &self.results_url
    }

    /// Casts a vote for `cover_id` on behalf of `device_id`.
    ///
    /// Returns the backend receipt as opaque JSON. A non-2xx response is
    /// an [`Error::Api`] carrying the status and the body text.
    pub async fn vote(&self, device_id: &str, cover_id: &str) -> Result<serde_json::Value> {
        let request = VoteRequest {
            device_id: device_id.to_string(),
            cover_id: cover_id.to_string(),
        };

        let response = self.client.post(&self.vote_url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&response.text().await?)?)
    }

    /// Fetches the current tally.
    pub async fn results(&self) -> Result<Vec<CoverVotes>> {
        let response = self.client.get(&self.results_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }
        let body = response.text().await?;
        parse_results(&body)
    }
}

/// Parses a results payload. Malformed JSON is an [`Error::Json`].
fn parse_results(body: &str) -> Result<Vec<CoverVotes>> {
    let parsed: ResultsResponse = serde_json::from_str(body)?;
    Ok(parsed.results)
}

/// Builder for [`VoteClient`]
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Overrides the backend base URL (trailing slash trimmed)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Overrides the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the client
    pub fn build(self) -> Result<VoteClient> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()?;
        Ok(VoteClient {
            client,
            vote_url: format!("{}/vote", self.base_url),
            results_url: format!("{}/results", self.base_url),
        })
    }
}
