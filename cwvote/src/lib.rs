//! # cwvote - Client de vote pour CoverWorld
//!
//! Cette crate fournit le client HTTP du backend de vote distant (un
//! collaborateur opaque) et l'état local du ballot : identité d'appareil
//! persistée, vote courant, politique un-vote-par-appareil.
//!
//! ## Fonctionnalités
//!
//! - `POST /vote` et `GET /results` contre le backend distant
//! - Identité d'appareil UUID v4 persistée via `cwconfig`
//! - Idempotence : revoter pour la même couverture est un no-op local
//! - Leaderboard filtré et trié ([`models::leaderboard`])
//! - Routes proxy Axum (feature `cwserver`)
//!
//! ## Utilisation
//!
//! ```rust,no_run
//! use cwvote::{Ballot, ConfigStore, VoteClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = VoteClient::new()?;
//!     let store = Arc::new(ConfigStore::new(cwconfig::get_config()));
//!     let ballot = Ballot::new(client, store);
//!     ballot.cast("2024_05_MAY").await?;
//!     Ok(())
//! }
//! ```

pub mod ballot;
pub mod client;
pub mod config_ext;
pub mod error;
pub mod models;

#[cfg(feature = "cwserver")]
pub mod api;
#[cfg(feature = "cwserver")]
pub mod cwserver_impl;
#[cfg(feature = "cwserver")]
pub mod openapi;

pub use ballot::{Ballot, BallotStore, CastOutcome, ConfigStore, MemoryStore};
pub use client::{ClientBuilder, DEFAULT_BASE_URL, VoteClient};
pub use config_ext::VoteConfigExt;
pub use error::{Error, Result};
pub use models::{CoverVotes, ResultsResponse, VoteRequest, leaderboard};

#[cfg(feature = "cwserver")]
pub use api::VoteApiState;
#[cfg(feature = "cwserver")]
pub use cwserver_impl::VoteExt;
#[cfg(feature = "cwserver")]
pub use openapi::ApiDoc;
