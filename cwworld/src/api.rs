//! API REST et serveur de fichiers pour le monde.
//!
//! Deux routers sont exposés :
//! - un router API (`/api/world`) retournant le layout figé de la session,
//! - un router de fichiers servant les images (`/covers/{file}`) et leurs
//!   vignettes (`/covers/thumbs/{file}`), avec repli sur l'image pleine
//!   taille quand la vignette manque.

use crate::catalog::WorldLayout;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use utoipa::ToSchema;

/// État partagé des handlers du monde.
#[derive(Clone)]
pub struct WorldState {
    /// Layout figé à l'ouverture de la session.
    pub layout: Arc<WorldLayout>,
    /// Répertoire disque des couvertures.
    pub covers_dir: Arc<PathBuf>,
}

impl WorldState {
    pub fn new(layout: WorldLayout, covers_dir: impl Into<PathBuf>) -> Self {
        Self {
            layout: Arc::new(layout),
            covers_dir: Arc::new(covers_dir.into()),
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

/// Récupère le layout du monde
///
/// Le layout est calculé une fois au démarrage : positions figées pour la
/// session, aucune mutation côté serveur.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Layout complet du monde", body = WorldLayout)
    ),
    tag = "world"
)]
pub async fn get_world(State(state): State<WorldState>) -> Json<WorldLayout> {
    Json((*state.layout).clone())
}

/// Router API du monde (à monter via `add_openapi`).
pub fn create_api_router(state: WorldState) -> Router {
    Router::new().route("/", get(get_world)).with_state(state)
}

fn content_type_for(file: &str) -> &'static str {
    match file.rsplit('.').next().map(|e| e.to_lowercase()).as_deref() {
        Some("webp") => "image/webp",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

fn not_found(file: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "NOT_FOUND".to_string(),
            message: format!("Cover {file} not found"),
        }),
    )
}

/// Refuse les noms de fichier sortant du répertoire servi.
fn is_safe_name(file: &str) -> bool {
    !file.is_empty() && !file.contains('/') && !file.contains('\\') && !file.contains("..")
}

async fn serve_file(state: &WorldState, file: &str, thumb: bool) -> axum::response::Response {
    if !is_safe_name(file) {
        return not_found(file).into_response();
    }

    let full = state.covers_dir.join(file);
    let path = if thumb {
        let candidate = state.covers_dir.join("thumbs").join(file);
        if candidate.exists() {
            candidate
        } else {
            // Vignette absente : repli sur l'image pleine taille.
            full
        }
    } else {
        full
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type_for(file))],
            bytes,
        )
            .into_response(),
        Err(_) => not_found(file).into_response(),
    }
}

async fn get_cover_file(
    State(state): State<WorldState>,
    Path(file): Path<String>,
) -> axum::response::Response {
    serve_file(&state, &file, false).await
}

async fn get_thumb_file(
    State(state): State<WorldState>,
    Path(file): Path<String>,
) -> axum::response::Response {
    serve_file(&state, &file, true).await
}

/// Router de fichiers des couvertures (à monter à la racine).
pub fn create_file_router(state: WorldState) -> Router {
    Router::new()
        .route("/covers/{file}", get(get_cover_file))
        .route("/covers/thumbs/{file}", get(get_thumb_file))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_traversal_is_rejected() {
        assert!(is_safe_name("2024_05_MAY.webp"));
        assert!(!is_safe_name("../config.yaml"));
        assert!(!is_safe_name("a/b.webp"));
        assert!(!is_safe_name(""));
    }

    #[test]
    fn content_type_follows_extension() {
        assert_eq!(content_type_for("x.webp"), "image/webp");
        assert_eq!(content_type_for("x.JPG"), "image/jpeg");
        assert_eq!(content_type_for("x"), "application/octet-stream");
    }
}
