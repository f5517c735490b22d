//! Catalogue des couvertures et construction du layout du monde.
//!
//! Le catalogue liste les fichiers image d'un répertoire (non récursif),
//! dérive l'identifiant de chaque couverture de son nom de fichier et
//! associe chaque couverture à un rectangle placé. Les positions sont
//! figées pour la durée de la session.

use crate::geometry::Rect;
use crate::placement::WorldConfig;
use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Extensions d'image reconnues par le catalogue.
const IMAGE_EXTENSIONS: &[&str] = &["webp", "jpg", "jpeg", "png"];

/// Une couverture du catalogue, avant placement.
#[derive(Debug, Clone)]
pub struct Cover {
    /// Identifiant dérivé du nom de fichier sans extension (ex: `2024_05_MAY`).
    pub id: String,
    /// Nom de fichier (ex: `2024_05_MAY.webp`).
    pub file_name: String,
    /// Chemin absolu du fichier source.
    pub path: PathBuf,
}

impl Cover {
    /// Construit une couverture depuis un chemin de fichier.
    ///
    /// Retourne `None` si l'extension n'est pas une extension d'image connue.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_string();
        let ext = path.extension()?.to_str()?.to_lowercase();
        if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            return None;
        }
        let id = cover_id(&file_name)?;
        Some(Self {
            id,
            file_name,
            path: path.to_path_buf(),
        })
    }
}

/// Dérive l'identifiant d'une couverture depuis son nom de fichier.
///
/// L'extension d'image est retirée (insensible à la casse) ; un nom vide
/// après suppression donne `None`.
pub fn cover_id(file_name: &str) -> Option<String> {
    let stem = Path::new(file_name).file_stem()?.to_str()?;
    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}

/// Chemin de la vignette correspondant à un chemin de couverture.
///
/// Le composant `thumbs` est inséré juste avant le nom de fichier :
/// `covers/X.webp` devient `covers/thumbs/X.webp`.
pub fn thumb_path(cover_path: &str) -> String {
    let mut parts: Vec<&str> = cover_path.split('/').collect();
    let file = parts.pop().unwrap_or(cover_path);
    parts.push("thumbs");
    parts.push(file);
    parts.join("/")
}

/// Catalogue de couvertures, dans l'ordre des noms de fichier.
#[derive(Debug, Clone)]
pub struct Catalog {
    covers: Vec<Cover>,
}

impl Catalog {
    /// Construit le catalogue depuis un répertoire.
    ///
    /// Seuls les fichiers image du premier niveau sont retenus (le
    /// sous-répertoire `thumbs` est donc ignoré). L'ordre est celui des
    /// noms de fichier, qui reproduit l'ordre chronologique du schéma de
    /// nommage daté des couvertures.
    pub fn scan(dir: &str) -> Result<Self> {
        let mut covers = Vec::new();
        let entries =
            fs::read_dir(dir).with_context(|| format!("Cannot read covers directory {dir}"))?;

        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(cover) = Cover::from_path(&entry.path()) {
                covers.push(cover);
            }
        }

        covers.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        info!(count = covers.len(), directory = dir, "Scanned cover catalog");
        Ok(Self { covers })
    }

    pub fn len(&self) -> usize {
        self.covers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.covers.is_empty()
    }

    pub fn covers(&self) -> &[Cover] {
        &self.covers
    }

    /// Identifiants valides du catalogue (pour filtrer le leaderboard).
    pub fn ids(&self) -> Vec<String> {
        self.covers.iter().map(|c| c.id.clone()).collect()
    }

    /// Place chaque couverture et construit le layout sérialisable.
    pub fn layout<R: Rng + ?Sized>(&self, config: &WorldConfig, rng: &mut R) -> WorldLayout {
        let rects = config.place(self.covers.len(), rng);
        let covers = self
            .covers
            .iter()
            .zip(rects.iter())
            .map(|(cover, rect)| {
                let src = format!("covers/{}", cover.file_name);
                PlacedCover {
                    id: cover.id.clone(),
                    thumb: thumb_path(&src),
                    src,
                    x: rect.x,
                    y: rect.y,
                }
            })
            .collect();

        WorldLayout {
            width: config.world_w,
            height: config.world_h,
            cover_width: config.cover_w,
            cover_height: config.cover_h,
            covers,
        }
    }
}

/// Une couverture placée, telle qu'exposée par l'API du monde.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "cwserver", derive(utoipa::ToSchema))]
pub struct PlacedCover {
    /// Identifiant de la couverture.
    #[cfg_attr(feature = "cwserver", schema(example = "2024_05_MAY"))]
    pub id: String,
    /// Route HTTP de l'image pleine taille.
    #[cfg_attr(feature = "cwserver", schema(example = "covers/2024_05_MAY.webp"))]
    pub src: String,
    /// Route HTTP de la vignette.
    #[cfg_attr(
        feature = "cwserver",
        schema(example = "covers/thumbs/2024_05_MAY.webp")
    )]
    pub thumb: String,
    /// Abscisse dans le monde.
    pub x: f64,
    /// Ordonnée dans le monde.
    pub y: f64,
}

/// Layout complet du monde, fixé à l'ouverture de la session.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "cwserver", derive(utoipa::ToSchema))]
pub struct WorldLayout {
    pub width: f64,
    pub height: f64,
    pub cover_width: f64,
    pub cover_height: f64,
    pub covers: Vec<PlacedCover>,
}

impl WorldLayout {
    /// Rectangle d'une couverture donnée, si elle existe.
    pub fn rect_of(&self, cover_id: &str, config: &WorldConfig) -> Option<Rect> {
        self.covers.iter().find(|c| c.id == cover_id).map(|c| {
            let (w, h) = config.slot_size();
            Rect::new(c.x, c.y, w, h)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_strips_image_extension_case_insensitively() {
        assert_eq!(cover_id("2024_05_MAY.webp").unwrap(), "2024_05_MAY");
        assert_eq!(cover_id("2024_05_MAY.WEBP").unwrap(), "2024_05_MAY");
        assert_eq!(cover_id("cover.jpeg").unwrap(), "cover");
    }

    #[test]
    fn thumb_path_inserts_thumbs_component() {
        assert_eq!(
            thumb_path("covers/2022_06_JUN.webp"),
            "covers/thumbs/2022_06_JUN.webp"
        );
    }

    #[test]
    fn scan_ignores_non_images_and_sorts_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("2023_01_JAN.webp"), b"x").unwrap();
        std::fs::write(dir.path().join("2022_06_JUN.webp"), b"x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("thumbs")).unwrap();
        std::fs::write(dir.path().join("thumbs/2022_06_JUN.webp"), b"x").unwrap();

        let catalog = Catalog::scan(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(catalog.ids(), vec!["2022_06_JUN", "2023_01_JAN"]);
    }

    #[test]
    fn layout_pairs_every_cover_with_a_position() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.webp", "b.webp", "c.webp"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        let catalog = Catalog::scan(dir.path().to_str().unwrap()).unwrap();

        let config = WorldConfig::default();
        let mut rng = rand::rng();
        let layout = catalog.layout(&config, &mut rng);

        assert_eq!(layout.covers.len(), 3);
        assert_eq!(layout.covers[0].src, "covers/a.webp");
        assert_eq!(layout.covers[0].thumb, "covers/thumbs/a.webp");
        assert!(layout.rect_of("b", &config).is_some());
        assert!(layout.rect_of("zz", &config).is_none());
    }
}
