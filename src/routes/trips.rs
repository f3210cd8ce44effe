use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        activity::{Activity, ActivityCreated, ActivityPayload},
        link::{Link, LinkCreated, LinkPayload},
        participant::{InvitePayload, Participant, ParticipantCreated},
        trip::{CreateTripPayload, Trip, TripCreated, UpdateTripPayload},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_trip))
        .route("/:id", get(trip_details).put(update_trip))
        .route("/:id/confirm", get(confirm_trip))
        .route("/:id/activities", get(list_activities).post(register_activity))
        .route("/:id/participants", get(list_participants))
        .route("/:id/invite", post(invite_participant))
        .route("/:id/links", get(list_links).post(register_link))
}

async fn create_trip(
    State(state): State<AppState>,
    Json(payload): Json<CreateTripPayload>,
) -> Result<Json<TripCreated>, AppError> {
    Ok(Json(state.trips.create_trip(&payload).await?))
}

async fn trip_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Trip>, AppError> {
    Ok(Json(state.trips.get_trip(id).await?))
}

async fn update_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTripPayload>,
) -> Result<Json<Trip>, AppError> {
    Ok(Json(state.trips.update_trip(id, &payload).await?))
}

async fn confirm_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Trip>, AppError> {
    Ok(Json(state.trips.confirm_trip(id).await?))
}

async fn register_activity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ActivityPayload>,
) -> Result<Json<ActivityCreated>, AppError> {
    Ok(Json(state.trips.register_activity(id, &payload).await?))
}

async fn list_activities(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Activity>>, AppError> {
    Ok(Json(state.trips.list_activities(id).await?))
}

async fn list_participants(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Participant>>, AppError> {
    Ok(Json(state.trips.list_participants(id).await?))
}

async fn invite_participant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<InvitePayload>,
) -> Result<Json<ParticipantCreated>, AppError> {
    Ok(Json(state.trips.invite_participant(id, &payload).await?))
}

async fn register_link(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<LinkPayload>,
) -> Result<Json<LinkCreated>, AppError> {
    Ok(Json(state.trips.register_link(id, &payload).await?))
}

async fn list_links(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Link>>, AppError> {
    Ok(Json(state.trips.list_links(id).await?))
}
