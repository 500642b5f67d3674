use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info};

use crate::error::{ApiError, INVALID_BODY_MESSAGE};
use crate::handlers::generate::REQUIRED_FIELDS_MESSAGE;
use crate::state::AppState;
use crate::store::SavedInfluencer;
use crate::utils::timing::{complete_request_timer, start_request_timer};

pub const NO_SAVED_INFLUENCER_MESSAGE: &str = "Nenhum influencer salvo";

const ROUTE: &str = "/api/influencer";

pub async fn get_influencer(State(state): State<AppState>) -> Response {
    let mut timer = start_request_timer(ROUTE, None);
    match state.influencers.get() {
        Some(saved) => {
            complete_request_timer(&mut timer, 200, None);
            Json(saved).into_response()
        }
        None => {
            complete_request_timer(&mut timer, 404, None);
            ApiError::NotFound(NO_SAVED_INFLUENCER_MESSAGE.to_string()).into_response()
        }
    }
}

pub async fn put_influencer(State(state): State<AppState>, body: Bytes) -> Response {
    let mut timer = start_request_timer(ROUTE, None);
    let result = save(&state, &body).await;
    match result {
        Ok(saved) => {
            complete_request_timer(&mut timer, 200, None);
            Json(saved).into_response()
        }
        Err(err) => {
            complete_request_timer(&mut timer, err.status().as_u16(), Some(err.to_string()));
            err.into_response()
        }
    }
}

async fn save(state: &AppState, body: &[u8]) -> Result<SavedInfluencer, ApiError> {
    let influencer: SavedInfluencer = serde_json::from_slice(body).map_err(|err| {
        info!("Rejecting influencer body: {err}");
        ApiError::validation(INVALID_BODY_MESSAGE)
    })?;

    let missing = influencer.missing_fields();
    if !missing.is_empty() {
        info!(missing = ?missing, "Influencer is missing identity fields");
        return Err(ApiError::validation(REQUIRED_FIELDS_MESSAGE));
    }

    state.influencers.save(influencer).await.map_err(|err| {
        error!("Failed to persist influencer: {err:#}");
        ApiError::Storage(format!("Erro ao salvar influencer: {err}"))
    })
}

pub async fn delete_influencer(State(state): State<AppState>) -> Response {
    let mut timer = start_request_timer(ROUTE, None);
    match state.influencers.clear().await {
        Ok(had_profile) => {
            info!(had_profile, "Cleared saved influencer");
            complete_request_timer(&mut timer, 204, None);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            error!("Failed to remove influencer file: {err:#}");
            let err = ApiError::Storage(format!("Erro ao remover influencer: {err}"));
            complete_request_timer(&mut timer, 500, Some(err.to_string()));
            err.into_response()
        }
    }
}
