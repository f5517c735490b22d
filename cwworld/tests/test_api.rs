//! Tests du serveur de fichiers des couvertures : vignette servie quand
//! elle existe, repli sur l'image pleine taille sinon, 404 pour le reste.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use cwworld::api::create_file_router;
use cwworld::{Catalog, WorldConfig, WorldState};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

const THUMB_BYTES: &[u8] = b"thumb payload";
const FULL_BYTES: &[u8] = b"full size payload";

fn covers_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("with_thumb.webp"), FULL_BYTES).unwrap();
    fs::write(dir.path().join("no_thumb.jpg"), FULL_BYTES).unwrap();
    fs::create_dir(dir.path().join("thumbs")).unwrap();
    fs::write(dir.path().join("thumbs/with_thumb.webp"), THUMB_BYTES).unwrap();
    dir
}

fn router_for(dir: &TempDir) -> axum::Router {
    let catalog = Catalog::scan(dir.path().to_str().unwrap()).unwrap();
    let layout = catalog.layout(&WorldConfig::default(), &mut StdRng::seed_from_u64(7));
    create_file_router(WorldState::new(layout, dir.path()))
}

async fn fetch(router: axum::Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

#[tokio::test]
async fn existing_thumb_is_served_as_is() {
    let dir = covers_dir();
    let (status, content_type, body) =
        fetch(router_for(&dir), "/covers/thumbs/with_thumb.webp").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/webp"));
    assert_eq!(body, THUMB_BYTES);
}

#[tokio::test]
async fn missing_thumb_falls_back_to_the_full_image() {
    let dir = covers_dir();
    let (status, content_type, body) =
        fetch(router_for(&dir), "/covers/thumbs/no_thumb.jpg").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/jpeg"));
    assert_eq!(body, FULL_BYTES);
}

#[tokio::test]
async fn full_image_route_serves_the_original_bytes() {
    let dir = covers_dir();
    let (status, _, body) = fetch(router_for(&dir), "/covers/with_thumb.webp").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, FULL_BYTES);
}

#[tokio::test]
async fn unknown_file_is_a_404() {
    let dir = covers_dir();
    let (status, _, _) = fetch(router_for(&dir), "/covers/missing.webp").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = fetch(router_for(&dir), "/covers/thumbs/missing.webp").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
