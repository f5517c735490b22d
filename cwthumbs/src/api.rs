//! API REST de la couleur moyenne d'une couverture.
//!
//! `GET /api/color/{cover_id}` retourne la couleur moyenne rehaussée de
//! l'image, utilisée par l'interface pour le halo de l'item actif. Un
//! échec de décodage retombe sur le gris neutre, seule une couverture
//! inconnue produit un 404.

use crate::color::{self, FALLBACK_GRAY, Rgb};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use cwworld::Cover;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;
use utoipa::ToSchema;

/// État partagé des handlers de couleur.
#[derive(Clone)]
pub struct ColorState {
    /// Répertoire disque des couvertures.
    pub covers_dir: Arc<PathBuf>,
}

impl ColorState {
    pub fn new(covers_dir: impl Into<PathBuf>) -> Self {
        Self {
            covers_dir: Arc::new(covers_dir.into()),
        }
    }
}

/// Couleur moyenne d'une couverture.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ColorResponse {
    /// Composante rouge (0–255)
    #[schema(example = 210)]
    pub r: u8,
    /// Composante verte (0–255)
    #[schema(example = 64)]
    pub g: u8,
    /// Composante bleue (0–255)
    #[schema(example = 64)]
    pub b: u8,
    /// Représentation CSS prête à l'emploi
    #[schema(example = "rgb(210, 64, 64)")]
    pub css: String,
}

impl From<Rgb> for ColorResponse {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            css: rgb.css(),
        }
    }
}

/// Réponse d'erreur générique
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Code d'erreur
    #[schema(example = "NOT_FOUND")]
    pub error: String,
    /// Message descriptif
    #[schema(example = "Cover not found")]
    pub message: String,
}

/// Retrouve le fichier d'une couverture par son identifiant.
fn resolve_cover(dir: &std::path::Path, cover_id: &str) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    for entry in entries.flatten() {
        if let Some(cover) = Cover::from_path(&entry.path()) {
            if cover.id == cover_id {
                return Some(cover.path);
            }
        }
    }
    None
}

/// Récupère la couleur moyenne d'une couverture
///
/// La couleur est calculée à la demande : moyenne d'un échantillon 40×40
/// en ignorant les pixels transparents, puis rehaussement HSL. Une image
/// présente mais illisible retombe sur le gris neutre.
#[utoipa::path(
    get,
    path = "/{cover_id}",
    params(
        ("cover_id" = String, Path, description = "Identifiant de la couverture")
    ),
    responses(
        (status = 200, description = "Couleur moyenne rehaussée", body = ColorResponse),
        (status = 404, description = "Couverture inconnue", body = ErrorResponse)
    ),
    tag = "color"
)]
pub async fn get_color(
    State(state): State<ColorState>,
    Path(cover_id): Path<String>,
) -> Result<Json<ColorResponse>, (StatusCode, Json<ErrorResponse>)> {
    let dir = state.covers_dir.clone();
    let id = cover_id.clone();

    let result = tokio::task::spawn_blocking(move || {
        let path = resolve_cover(&dir, &id)?;
        Some(match image::open(&path) {
            Ok(img) => color::average_color(&img),
            Err(e) => {
                warn!(cover_id = %id, error = %e, "Cannot decode cover, neutral gray");
                FALLBACK_GRAY
            }
        })
    })
    .await;

    match result {
        Ok(Some(rgb)) => Ok(Json(rgb.into())),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "NOT_FOUND".to_string(),
                message: format!("Cover {cover_id} not found"),
            }),
        )),
        Err(e) => {
            warn!(error = %e, "Color task failed");
            Ok(Json(FALLBACK_GRAY.into()))
        }
    }
}

/// Router API de la couleur (à monter via `add_openapi`).
pub fn create_api_router(state: ColorState) -> Router {
    Router::new()
        .route("/{cover_id}", get(get_color))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn resolve_matches_id_regardless_of_extension() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255]));
        img.save(dir.path().join("2024_05_MAY.png")).unwrap();

        assert!(resolve_cover(dir.path(), "2024_05_MAY").is_some());
        assert!(resolve_cover(dir.path(), "2024_06_JUN").is_none());
    }
}
