//! Documentation OpenAPI pour l'API de vote

use utoipa::OpenApi;

/// Documentation OpenAPI pour l'API CWVote
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::post_vote,
        crate::api::get_results,
        crate::api::delete_vote,
    ),
    components(
        schemas(
            crate::api::CastRequest,
            crate::api::CastResponse,
            crate::api::ResultsView,
            crate::api::ErrorResponse,
            crate::models::CoverVotes,
        )
    ),
    tags(
        (name = "vote", description = "Vote et leaderboard (proxy vers le backend distant)")
    ),
    info(
        title = "CoverWorld Vote API",
        version = "0.1.0",
        description = r#"
# API de vote

Proxy minimal vers le backend de vote distant, avec politique
un-vote-par-appareil gérée localement.

## Endpoints principaux

### POST /api/vote
Vote pour une couverture (`{"cover_id": "..."}`). Revoter pour la même
couverture est sans effet.

### GET /api/vote/results
Leaderboard filtré et trié (top 3), avec le vote local courant.

### DELETE /api/vote
Oublie le vote local ; le décompte distant n'est pas modifié.
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
