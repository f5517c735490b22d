//! # cwworld - Monde et placement des couvertures pour CoverWorld
//!
//! Cette crate gère le canvas virtuel ("monde") de la galerie : placement
//! aléatoire sans chevauchement des couvertures, catalogue des fichiers
//! image et layout sérialisable exposé à l'interface.
//!
//! ## Fonctionnalités
//!
//! - Prédicat d'écart minimal entre rectangles ([`geometry::min_gap`])
//! - Échantillonnage par acceptation-rejet avec budget d'essais borné
//!   (best-effort : le dernier candidat est gardé en cas d'épuisement)
//! - Catalogue des couvertures dérivé des noms de fichier
//! - Routes HTTP du layout et des images (feature `cwserver`)
//!
//! ## Utilisation
//!
//! ```rust,no_run
//! use cwworld::{Catalog, WorldConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let catalog = Catalog::scan("./covers")?;
//!     let config = WorldConfig::default();
//!     let layout = catalog.layout(&config, &mut rand::rng());
//!     println!("{} covers placed", layout.covers.len());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config_ext;
pub mod geometry;
pub mod placement;

#[cfg(feature = "cwserver")]
pub mod api;
#[cfg(feature = "cwserver")]
pub mod cwserver_impl;
#[cfg(feature = "cwserver")]
pub mod openapi;

pub use catalog::{Catalog, Cover, PlacedCover, WorldLayout, cover_id, thumb_path};
pub use config_ext::WorldConfigExt;
pub use geometry::{Rect, min_gap};
pub use placement::WorldConfig;

#[cfg(feature = "cwserver")]
pub use api::WorldState;
#[cfg(feature = "cwserver")]
pub use cwserver_impl::WorldExt;
#[cfg(feature = "cwserver")]
pub use openapi::ApiDoc;
