use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use koltuk::{
    reservation::{Reservation, ReservationId, SeatNumber},
    trip::TripId,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, UserSession};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    pub seats: Vec<SeatNumber>,
}

pub async fn confirm(
    Path(trip_id): Path<TripId>,
    session: UserSession,
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConfirmRequest>,
) -> Result<Response, ApiError> {
    let selection = request.seats.into_iter().collect();
    let reservation = state.engine.confirm(trip_id, &selection, &session).await?;
    Ok((StatusCode::CREATED, Json(reservation)).into_response())
}

pub async fn my_reservations(
    session: UserSession,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Reservation>>, ApiError> {
    Ok(Json(state.engine.reservations_for(&session).await?))
}

pub async fn cancel_reservation(
    Path(id): Path<ReservationId>,
    session: UserSession,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, ApiError> {
    state.engine.cancel_reservation(id, &session).await?;
    Ok(StatusCode::NO_CONTENT)
}
