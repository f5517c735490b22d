//! # cwapp - Interface web embarquée de CoverWorld
//!
//! Cette crate fournit le frontend de la galerie, intégré via `RustEmbed`
//! pour être servi par `cwserver` sans fichier statique externe.
//!
//! ## Vue d'ensemble
//!
//! L'interface est une application JavaScript sans framework : un canvas
//! virtuel panoramique et zoomable affichant les couvertures placées par le
//! serveur, l'agrandissement au clic avec inclinaison 3D, et le vote au
//! double-clic. Toutes les constantes de mouvement (ressort, zoom,
//! agrandissement) viennent de l'API `/api/motion` : le navigateur ne fait
//! qu'exécuter, la physique est définie côté Rust.
//!
//! ## Structure des fichiers
//!
//! ```text
//! cwapp/
//! ├── Cargo.toml          # Dépendances Rust (rust-embed)
//! ├── src/
//! │   └── lib.rs          # Point d'entrée Rust (ce fichier)
//! └── webapp/
//!     ├── index.html      # Page unique
//!     ├── app.js          # Rendu, pan/zoom, physique, vote
//!     └── style.css       # Styles
//! ```
//!
//! ## Utilisation
//!
//! ```rust,no_run
//! use cwapp::WebAppExt;
//! use cwserver::ServerBuilder;
//!
//! # async fn example() {
//! let mut server = ServerBuilder::new_configured().build();
//! server.add_webapp().await;
//! # }
//! ```

use rust_embed::RustEmbed;

/// Application web embarquée.
///
/// Tous les fichiers du répertoire `webapp/` sont inclus dans le binaire
/// au moment de la compilation.
#[derive(RustEmbed, Clone)]
#[folder = "webapp"]
pub struct Webapp;

// Implémentation du trait pour cwserver::Server (feature-gated)
#[cfg(feature = "cwserver")]
mod cwserver_impl;

#[cfg(feature = "cwserver")]
pub use cwserver_impl::WebAppExt;
