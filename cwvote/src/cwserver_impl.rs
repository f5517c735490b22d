//! Implémentation du trait [`VoteExt`] pour `cwserver::Server`

use crate::api::{VoteApiState, create_api_router};
use crate::ballot::{Ballot, ConfigStore};
use crate::config_ext::VoteConfigExt;
use anyhow::Result;
use cwserver::Server;
use std::collections::HashSet;
use std::sync::Arc;
use utoipa::OpenApi;

/// Trait d'extension pour enregistrer l'API de vote sur le serveur
#[async_trait::async_trait]
pub trait VoteExt {
    /// Enregistre les routes de vote
    ///
    /// # Routes enregistrées
    ///
    /// - `POST /api/vote` - Voter pour une couverture
    /// - `GET /api/vote/results` - Leaderboard filtré
    /// - `DELETE /api/vote` - Oublier le vote local
    /// - `GET /swagger-ui/vote` - Documentation interactive
    async fn init_vote(&mut self, state: VoteApiState);

    /// Construit le ballot depuis la configuration puis enregistre les
    /// routes. `valid_ids` sont les identifiants du catalogue.
    async fn init_vote_configured(&mut self, valid_ids: HashSet<String>) -> Result<()>;
}

#[async_trait::async_trait]
impl VoteExt for Server {
    async fn init_vote(&mut self, state: VoteApiState) {
        let api_router = create_api_router(state);
        let openapi = crate::ApiDoc::openapi();
        self.add_openapi(api_router, openapi, "vote").await;
    }

    async fn init_vote_configured(&mut self, valid_ids: HashSet<String>) -> Result<()> {
        let config = cwconfig::get_config();
        let client = config.build_vote_client()?;
        let store = Arc::new(ConfigStore::new(config));
        let ballot = Arc::new(Ballot::new(client, store));

        self.init_vote(VoteApiState {
            ballot,
            valid_ids: Arc::new(valid_ids),
        })
        .await;
        Ok(())
    }
}
