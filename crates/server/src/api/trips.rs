use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use futures_util::{Stream, StreamExt};
use koltuk::{
    filter::{self, Facets},
    trip::{TripForm, TripId},
};
use std::{collections::HashMap, sync::Arc};
use tokio_stream::wrappers::WatchStream;

use super::ApiError;
use crate::{dto::TripDto, state::AppState};

pub async fn list_trips(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<TripDto>> {
    let trips = state.engine.trips().current();
    let query = params.get("q").map(String::as_str).unwrap_or_default();
    let result = filter::filter_by_query(&trips, query)
        .into_iter()
        .map(TripDto::from)
        .collect();
    Json(result)
}

pub async fn facets(State(state): State<Arc<AppState>>) -> Json<Facets> {
    let trips = state.engine.trips().current();
    Json(Facets::new(&trips))
}

/// Server sent events, one `trips` event with the full list per change.
pub async fn stream_trips(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let receiver = state.engine.trips().into_receiver();
    let stream = WatchStream::new(receiver).map(|snapshot| {
        let trips: Vec<TripDto> = snapshot.iter().map(TripDto::from).collect();
        Event::default().event("trips").json_data(trips)
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}

pub async fn create_trip(
    State(state): State<Arc<AppState>>,
    Json(form): Json<TripForm>,
) -> Result<Response, ApiError> {
    let trip = state.engine.create_trip(&form).await?;
    Ok((StatusCode::CREATED, Json(TripDto::from(&trip))).into_response())
}

pub async fn get_trip(
    Path(id): Path<TripId>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<TripDto>, ApiError> {
    let trip = state.engine.trip(id).await?;
    Ok(Json(TripDto::from(&trip)))
}

pub async fn delete_trip(
    Path(id): Path<TripId>,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, ApiError> {
    state.engine.delete_trip(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
