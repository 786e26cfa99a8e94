mod api;
mod config;
mod dto;
mod state;

use crate::{config::Config, state::AppState};
use axum::routing::{delete, get, post};
use koltuk::{
    engine::Engine,
    repository::{MemoryStore, source},
};
use std::{sync::Arc, time::Instant};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let config = Config::from_env();
    let engine = Engine::new(MemoryStore::new());

    if let Some(path) = &config.seed_path {
        info!("Importing trips from {}...", path.display());
        let now = Instant::now();
        match engine.import_csv(path, &source::Config::default()).await {
            Ok(count) => info!("Imported {count} trips in {:?}", now.elapsed()),
            Err(err) => {
                error!("Failed to import trips: {err}");
                std::process::exit(1);
            }
        }
    }
    let state = Arc::new(AppState::new(engine));

    let app = axum::Router::new()
        .route("/trips", get(api::list_trips).post(api::create_trip))
        .route("/trips/facets", get(api::facets))
        .route("/trips/stream", get(api::stream_trips))
        .route("/trips/{id}", get(api::get_trip).delete(api::delete_trip))
        .route("/trips/{id}/seats", get(api::seat_map))
        .route("/trips/{id}/reservations", post(api::confirm))
        .route("/reservations", get(api::my_reservations))
        .route("/reservations/{id}", delete(api::cancel_reservation))
        .with_state(state);

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", config.port);
            std::process::exit(1);
        }
    };
    info!("Listening to port {}", config.port);
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
