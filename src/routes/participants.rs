use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::participant::{ConfirmParticipantPayload, Participant},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:id", get(participant_details))
        .route("/:id/confirm", post(confirm_participant))
}

async fn participant_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Participant>, AppError> {
    Ok(Json(state.participants.get(id).await?))
}

async fn confirm_participant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ConfirmParticipantPayload>,
) -> Result<Json<Participant>, AppError> {
    Ok(Json(state.participants.confirm(id, &payload).await?))
}
