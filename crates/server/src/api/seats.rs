use axum::{
    Json,
    extract::{Path, Query, State},
};
use koltuk::{reservation::SeatList, trip::TripId};
use std::{collections::HashMap, sync::Arc};

use super::ApiError;
use crate::{dto::SeatMapDto, state::AppState};

/// Seat map of a trip. `selected` carries the caller's pending selection in
/// canonical form, e.g. `?selected=3,7`.
pub async fn seat_map(
    Path(id): Path<TripId>,
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<SeatMapDto>, ApiError> {
    let selection: SeatList = match params.get("selected") {
        Some(value) => value.parse()?,
        None => SeatList::new(),
    };
    let mut map = state.engine.seat_map(id).await?;
    map.select_all(selection.iter())
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;
    Ok(Json(SeatMapDto::from(id, &map)))
}
