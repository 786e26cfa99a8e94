use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use koltuk::{engine, reservation};
use serde::Serialize;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized,
    Engine(engine::Error),
}

impl From<engine::Error> for ApiError {
    fn from(value: engine::Error) -> Self {
        Self::Engine(value)
    }
}

impl From<reservation::Error> for ApiError {
    fn from(value: reservation::Error) -> Self {
        Self::Engine(value.into())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    seats: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut seats = None;
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Missing user id".to_string()),
            ApiError::Engine(err) => match err {
                engine::Error::Validation(_) | engine::Error::Seat(_) => {
                    (StatusCode::BAD_REQUEST, err.to_string())
                }
                engine::Error::Reservation(reservation::Error::SeatConflict { seats: taken }) => {
                    seats = Some(taken.to_string());
                    (
                        StatusCode::CONFLICT,
                        format!("Seats {taken} are already reserved"),
                    )
                }
                engine::Error::Reservation(_) => (StatusCode::BAD_REQUEST, err.to_string()),
                engine::Error::TripNotFound(_) | engine::Error::ReservationNotFound(_) => {
                    (StatusCode::NOT_FOUND, err.to_string())
                }
                engine::Error::Store(err) => {
                    error!("Store failure: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal Server Error".to_string(),
                    )
                }
            },
        };

        (
            status,
            Json(ErrorBody {
                error: message,
                seats,
            }),
        )
            .into_response()
    }
}
