//! Génération en lot des vignettes du catalogue.
//!
//! Passe unique et non récursive : chaque image du répertoire source
//! produit une vignette WebP du même nom dans le répertoire destination.
//! Une image illisible est signalée puis ignorée.

use crate::color;
use crate::webp::{encode_webp, make_thumbnail};
use anyhow::{Context, Result};
use cwworld::Catalog;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Génère les vignettes de toutes les images de `src` dans `dest`.
///
/// Retourne le nombre de vignettes écrites. Le répertoire destination est
/// créé si besoin ; le sous-répertoire des vignettes lui-même n'est jamais
/// parcouru.
pub fn generate_all(src: &Path, dest: &Path, size: u32, quality: f32) -> Result<usize> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Cannot create thumbs directory {}", dest.display()))?;

    let catalog = Catalog::scan(
        src.to_str()
            .context("Covers directory path is not valid UTF-8")?,
    )?;

    let mut written = 0;
    for cover in catalog.covers() {
        let img = match image::open(&cover.path) {
            Ok(img) => img,
            Err(e) => {
                warn!(file = %cover.file_name, error = %e, "Unreadable image, skipped");
                continue;
            }
        };

        let thumb = make_thumbnail(&img, size);
        let bytes = encode_webp(&thumb, quality)?;
        let out = dest.join(&cover.file_name);
        fs::write(&out, &bytes)
            .with_context(|| format!("Cannot write thumbnail {}", out.display()))?;

        let avg = color::average_color(&img);
        info!(
            file = %cover.file_name,
            size,
            color = %avg.css(),
            "Thumbnail written"
        );
        written += 1;
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn generates_one_thumbnail_per_image() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["2024_05_MAY.png", "2024_06_JUN.png"] {
            let img = RgbaImage::from_pixel(300, 300, Rgba([40, 80, 120, 255]));
            img.save(dir.path().join(name)).unwrap();
        }
        fs::write(dir.path().join("notes.txt"), b"not an image").unwrap();

        let dest = dir.path().join("thumbs");
        let count = generate_all(dir.path(), &dest, 140, 80.0).unwrap();

        assert_eq!(count, 2);
        let bytes = fs::read(dest.join("2024_05_MAY.png")).unwrap();
        assert_eq!(&bytes[8..12], b"WEBP");
    }

    #[test]
    fn unreadable_image_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.webp"), b"definitely not webp").unwrap();
        let img = RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 255]));
        img.save(dir.path().join("ok.png")).unwrap();

        let dest = dir.path().join("thumbs");
        let count = generate_all(dir.path(), &dest, 64, 80.0).unwrap();
        assert_eq!(count, 1);
    }
}
