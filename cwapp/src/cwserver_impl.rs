//! Implémentation du trait [`WebAppExt`] pour `cwserver::Server`
//!
//! Pattern d'extension : `cwapp` enrichit `cwserver::Server` sans que
//! `cwserver` ne connaisse l'interface.

use crate::Webapp;
use cwserver::Server;

/// Trait d'extension pour monter l'interface embarquée
#[async_trait::async_trait]
pub trait WebAppExt {
    /// Monte l'interface à la racine du serveur.
    ///
    /// Les chemins non trouvés renvoient `index.html` ; les routes `/api`
    /// et `/covers` restent prioritaires.
    async fn add_webapp(&mut self);
}

#[async_trait::async_trait]
impl WebAppExt for Server {
    async fn add_webapp(&mut self) {
        self.add_spa::<Webapp>("/").await;
    }
}
