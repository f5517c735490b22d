//! Binaire `cwthumbs` : génération hors ligne des vignettes.
//!
//! Aucune option : le répertoire des couvertures et les paramètres des
//! vignettes viennent de la configuration CoverWorld.

use anyhow::Result;
use cwthumbs::{ThumbsConfigExt, generate_all};
use cwworld::WorldConfigExt;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = cwconfig::get_config();
    let covers_dir = config.get_covers_dir()?;
    let thumbs_dir = config.get_thumbs_dir()?;
    let size = config.get_thumb_size();
    let quality = config.get_thumb_quality();

    info!("🖼️ Generating thumbnails from {covers_dir}");
    let count = generate_all(
        Path::new(&covers_dir),
        Path::new(&thumbs_dir),
        size,
        quality,
    )?;
    info!("✅ {count} thumbnail(s) written to {thumbs_dir}");

    Ok(())
}
