//! Implémentation du trait [`WorldExt`] pour `cwserver::Server`
//!
//! Pattern d'extension : `cwworld` enrichit `cwserver::Server` sans que
//! `cwserver` ne connaisse le monde.

use crate::api::{WorldState, create_api_router, create_file_router};
use crate::catalog::{Catalog, WorldLayout};
use crate::config_ext::WorldConfigExt;
use anyhow::Result;
use cwserver::Server;
use utoipa::OpenApi;

/// Trait d'extension pour enregistrer le monde sur le serveur
#[async_trait::async_trait]
pub trait WorldExt {
    /// Enregistre les routes du monde
    ///
    /// # Routes enregistrées
    ///
    /// - `GET /api/world` - Layout de la session (API REST)
    /// - `GET /covers/{file}` - Image pleine taille
    /// - `GET /covers/thumbs/{file}` - Vignette (repli sur l'image)
    /// - `GET /swagger-ui/world` - Documentation interactive
    async fn init_world(&mut self, state: WorldState);

    /// Construit le catalogue et le layout depuis la configuration, puis
    /// enregistre les routes. Retourne le layout figé de la session.
    async fn init_world_configured(&mut self) -> Result<WorldState>;
}

#[async_trait::async_trait]
impl WorldExt for Server {
    async fn init_world(&mut self, state: WorldState) {
        let file_router = create_file_router(state.clone());
        self.add_router("/", file_router).await;

        let api_router = create_api_router(state);
        let openapi = crate::ApiDoc::openapi();
        self.add_openapi(api_router, openapi, "world").await;
    }

    async fn init_world_configured(&mut self) -> Result<WorldState> {
        let config = cwconfig::get_config();
        let covers_dir = config.get_covers_dir()?;
        let world_config = config.get_world_config();

        let catalog = Catalog::scan(&covers_dir)?;
        let layout: WorldLayout = {
            let mut rng = rand::rng();
            catalog.layout(&world_config, &mut rng)
        };

        let state = WorldState::new(layout, covers_dir);
        self.init_world(state.clone()).await;
        Ok(state)
    }
}
