//! # cwthumbs - Vignettes et couleurs des couvertures pour CoverWorld
//!
//! Pipeline d'images hors ligne : génération en lot des vignettes WebP du
//! catalogue (binaire `cwthumbs`, sans option) et extraction de la couleur
//! moyenne d'une couverture pour le halo de l'interface.
//!
//! ## Fonctionnalités
//!
//! - Vignettes carrées WebP recadrées au centre ([`make_thumbnail`])
//! - Couleur moyenne rehaussée en HSL ([`color::average_color`])
//! - Route HTTP `GET /api/color/{cover_id}` (feature `cwserver`)

pub mod color;
pub mod config_ext;
pub mod generate;
pub mod webp;

#[cfg(feature = "cwserver")]
pub mod api;
#[cfg(feature = "cwserver")]
pub mod cwserver_impl;
#[cfg(feature = "cwserver")]
pub mod openapi;

pub use color::{Hsl, Rgb, average_color, boost, hsl_to_rgb, rgb_to_hsl};
pub use config_ext::ThumbsConfigExt;
pub use generate::generate_all;
pub use webp::{encode_webp, make_thumbnail};

#[cfg(feature = "cwserver")]
pub use api::ColorState;
#[cfg(feature = "cwserver")]
pub use cwserver_impl::ThumbsExt;
#[cfg(feature = "cwserver")]
pub use openapi::ApiDoc;
