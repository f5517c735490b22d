//! Documentation OpenAPI pour l'API du monde

use utoipa::OpenApi;

/// Documentation OpenAPI pour l'API CWWorld
#[derive(OpenApi)]
#[openapi(
    paths(crate::api::get_world),
    components(
        schemas(
            crate::catalog::WorldLayout,
            crate::catalog::PlacedCover,
            crate::api::ErrorResponse,
        )
    ),
    tags(
        (name = "world", description = "Layout du monde et placement des couvertures")
    ),
    info(
        title = "CoverWorld World API",
        version = "0.1.0",
        description = r#"
# API du monde

## Endpoints principaux

### GET /api/world
Layout complet de la session : dimensions du monde et couvertures placées.

## Servir les fichiers

### GET /covers/{file}
Image pleine taille.

### GET /covers/thumbs/{file}
Vignette ; repli sur l'image pleine taille si la vignette n'existe pas.
        "#,
        contact(
            name = "CoverWorld",
        ),
        license(
            name = "MIT",
        ),
    )
)]
pub struct ApiDoc;
