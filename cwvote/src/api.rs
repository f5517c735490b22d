//! API REST du vote (proxy vers le backend distant)
//!
//! Trois routes, pensées pour l'interface web : voter, lire le
//! leaderboard filtré, oublier le vote local. Les erreurs réseau sont
//! loggées ici (le site d'appel) et remontées en 502, jamais retentées.

use crate::ballot::{Ballot, CastOutcome};
use crate::models::{CoverVotes, leaderboard};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

/// Nombre d'entrées affichées au leaderboard.
pub const LEADERBOARD_TOP: usize = 3;

/// État partagé des handlers de vote.
#[derive(Clone)]
pub struct VoteApiState {
    pub ballot: Arc<Ballot>,
    /// Identifiants connus du catalogue, pour filtrer le leaderboard.
    pub valid_ids: Arc<HashSet<String>>,
}

/// Requête de vote côté interface.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CastRequest {
    /// Couverture choisie
    #[schema(example = "2024_05_MAY")]
    pub cover_id: String,
}

/// Réponse après un vote.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CastResponse {
    /// `cast` si le vote a été transmis, `unchanged` s'il existait déjà
    #[schema(example = "cast")]
    pub status: String,
    /// Vote local courant après l'opération
    pub current_vote: Option<String>,
}

/// Réponse d'erreur générique
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Code d'erreur
    #[schema(example = "VOTE_FAILED")]
    pub error: String,
    /// Message descriptif
    pub message: String,
}

/// Vote pour une couverture
///
/// Politique un-vote-par-appareil, côté client : revoter pour la même
/// couverture ne déclenche aucun appel réseau.
#[utoipa::path(
    post,
    path = "/",
    request_body = CastRequest,
    responses(
        (status = 200, description = "Vote enregistré ou inchangé", body = CastResponse),
        (status = 502, description = "Backend de vote injoignable", body = ErrorResponse)
    ),
    tag = "vote"
)]
pub async fn post_vote(
    State(state): State<VoteApiState>,
    Json(request): Json<CastRequest>,
) -> impl IntoResponse {
    match state.ballot.cast(&request.cover_id).await {
        Ok(outcome) => {
            let status = match outcome {
                CastOutcome::Cast(_) => "cast",
                CastOutcome::Unchanged => "unchanged",
            };
            (
                StatusCode::OK,
                Json(CastResponse {
                    status: status.to_string(),
                    current_vote: state.ballot.current_vote(),
                }),
            )
                .into_response()
        }
        Err(err) => {
            error!("Vote failed: {}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "VOTE_FAILED".to_string(),
                    message: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Leaderboard courant
///
/// Résultats du backend filtrés aux couvertures connues ayant au moins un
/// vote, triés par votes décroissants, tronqués au top 3. Le vote local de
/// l'appareil est joint pour l'affichage.
#[utoipa::path(
    get,
    path = "/results",
    responses(
        (status = 200, description = "Leaderboard filtré", body = ResultsView),
        (status = 502, description = "Backend de vote injoignable", body = ErrorResponse)
    ),
    tag = "vote"
)]
pub async fn get_results(State(state): State<VoteApiState>) -> impl IntoResponse {
    match state.ballot.results().await {
        Ok(results) => {
            let board = leaderboard(&results, &state.valid_ids, LEADERBOARD_TOP);
            (
                StatusCode::OK,
                Json(ResultsView {
                    results: board,
                    current_vote: state.ballot.current_vote(),
                }),
            )
                .into_response()
        }
        Err(err) => {
            error!("Results fetch failed: {}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "RESULTS_FAILED".to_string(),
                    message: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Vue du leaderboard renvoyée à l'interface.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResultsView {
    pub results: Vec<CoverVotes>,
    /// Vote local courant de cet appareil
    pub current_vote: Option<String>,
}

/// Oublie le vote local
///
/// Le décompte distant n'est pas modifié.
#[utoipa::path(
    delete,
    path = "/",
    responses(
        (status = 200, description = "Vote local oublié", body = CastResponse)
    ),
    tag = "vote"
)]
pub async fn delete_vote(State(state): State<VoteApiState>) -> impl IntoResponse {
    match state.ballot.clear_local() {
        Ok(()) => (
            StatusCode::OK,
            Json(CastResponse {
                status: "cleared".to_string(),
                current_vote: None,
            }),
        )
            .into_response(),
        Err(err) => {
            error!("Clearing local vote failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "CLEAR_FAILED".to_string(),
                    message: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Router API du vote (à monter via `add_openapi`).
pub fn create_api_router(state: VoteApiState) -> Router {
    Router::new()
        .route("/", post(post_vote).delete(delete_vote))
        .route("/results", get(get_results))
        .with_state(state)
}
