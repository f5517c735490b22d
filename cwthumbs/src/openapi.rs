//! Documentation OpenAPI pour l'API de couleur

use utoipa::OpenApi;

/// Documentation OpenAPI pour l'API CWThumbs
#[derive(OpenApi)]
#[openapi(
    paths(crate::api::get_color),
    components(
        schemas(
            crate::api::ColorResponse,
            crate::api::ErrorResponse,
        )
    ),
    tags(
        (name = "color", description = "Couleur moyenne des couvertures")
    ),
    info(
        title = "CoverWorld Color API",
        version = "0.1.0",
        description = r#"
# API de couleur

## Endpoints principaux

### GET /api/color/{cover_id}
Couleur moyenne rehaussée d'une couverture (échantillon 40×40, pixels
transparents ignorés, saturation ×1.25 et luminosité ×1.05). Utilisée
par l'interface pour le halo de l'item actif.
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
