//! Extension de `cwconfig::Config` pour le client de vote.

use crate::client::{DEFAULT_BASE_URL, VoteClient};
use crate::error::Result;
use cwconfig::Config;
use serde_yaml::Value;

/// Accès typé aux paramètres de vote dans la configuration.
pub trait VoteConfigExt {
    /// URL de base du backend de vote, ou la valeur par défaut.
    fn get_vote_base_url(&self) -> String;

    /// Construit un [`VoteClient`] depuis la configuration.
    fn build_vote_client(&self) -> Result<VoteClient>;
}

impl VoteConfigExt for Config {
    fn get_vote_base_url(&self) -> String {
        match self.get_value(&["vote", "base_url"]) {
            Ok(Value::String(s)) if !s.is_empty() => s,
            _ => DEFAULT_BASE_URL.to_string(),
        }
    }

    fn build_vote_client(&self) -> Result<VoteClient> {
        VoteClient::builder()
            .base_url(self.get_vote_base_url())
            .build()
    }
}
