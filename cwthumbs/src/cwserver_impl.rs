//! Implémentation du trait [`ThumbsExt`] pour `cwserver::Server`

use crate::api::{ColorState, create_api_router};
use anyhow::Result;
use cwserver::Server;
use cwworld::WorldConfigExt;
use utoipa::OpenApi;

/// Trait d'extension pour enregistrer l'API de couleur sur le serveur
#[async_trait::async_trait]
pub trait ThumbsExt {
    /// Enregistre l'API de couleur
    ///
    /// # Routes enregistrées
    ///
    /// - `GET /api/color/{cover_id}` - Couleur moyenne rehaussée
    /// - `GET /swagger-ui/color` - Documentation interactive
    async fn init_color(&mut self, state: ColorState);

    /// Construit l'état depuis la configuration puis enregistre l'API.
    async fn init_color_configured(&mut self) -> Result<()>;
}

#[async_trait::async_trait]
impl ThumbsExt for Server {
    async fn init_color(&mut self, state: ColorState) {
        let router = create_api_router(state);
        let openapi = crate::ApiDoc::openapi();
        self.add_openapi(router, openapi, "color").await;
    }

    async fn init_color_configured(&mut self) -> Result<()> {
        let config = cwconfig::get_config();
        let covers_dir = config.get_covers_dir()?;
        self.init_color(ColorState::new(covers_dir)).await;
        Ok(())
    }
}
