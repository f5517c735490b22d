//! # cwserver - Serveur web haut niveau basé sur Axum
//!
//! Cette crate fournit une abstraction simple et ergonomique pour créer des
//! serveurs HTTP avec Axum, conçue pour l'application CoverWorld.
//!
//! ## Fonctionnalités
//!
//! - 🚀 **API de haut niveau** : routes JSON, sous-routers, SPA embarquée
//! - 📚 **Documentation OpenAPI** : génération automatique de Swagger UI
//! - ⚡ **Arrêt gracieux** : gestion propre de l'arrêt sur Ctrl+C
//!
//! Les crates métier enrichissent [`Server`] par traits d'extension
//! (`WorldExt`, `VoteExt`, ...) : le serveur n'a aucune connaissance du
//! domaine.
//!
//! ## Exemple d'utilisation
//!
//! ```rust,no_run
//! use cwserver::{ServerBuilder, logs::{LoggingOptions, init_logging}};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_logging(LoggingOptions::default());
//!
//!     let mut server = ServerBuilder::new_configured().build();
//!
//!     server.add_route("/api/status", || async {
//!         serde_json::json!({"status": "ok"})
//!     }).await;
//!
//!     server.start().await;
//!     server.wait().await;
//! }
//! ```

pub mod logs;
pub mod server;

pub use logs::{LoggingOptions, init_logging};
pub use server::{Server, ServerBuilder, ServerInfo};
