use axum::{extract::FromRequestParts, http::request::Parts};
use koltuk::{engine::Session, reservation::UserId};

use super::ApiError;

/// Header carrying the signed in user's id.
pub const USER_HEADER: &str = "x-user-id";

pub struct UserSession(pub UserId);

impl Session for UserSession {
    fn user_id(&self) -> UserId {
        self.0
    }
}

impl<S> FromRequestParts<S> for UserSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse().ok())
            .map(UserSession)
            .ok_or(ApiError::Unauthorized)
    }
}
