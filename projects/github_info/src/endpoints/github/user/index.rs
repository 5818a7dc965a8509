use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::IntoResponse,
};
use interfaces_github_users::index::{fetch_user, FetchUserError};
use serde_json::Value;
use thiserror::Error;
use tracing::error;

use crate::{endpoints::error::ErrorBody, state::AppState};

pub const FAILURE_MESSAGE: &str = "Failed to fetch GitHub user data";

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("FetchUser {username}: {source}")]
    FetchUser {
        username: String,
        #[source]
        source: FetchUserError,
    },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        error!(error = %self, "github user lookup failed");

        match self {
            HandlerError::FetchUser { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody { error: FAILURE_MESSAGE }),
            )
                .into_response(),
        }
    }
}

/// Axum handler: GET /github/{username}
///
/// Relays the upstream user object untouched.
pub async fn handler(
    Extension(state): Extension<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Value>, HandlerError> {
    let user = fetch_user(
        &state.http,
        &state.config.github_api_url,
        &state.config.user_agent,
        &username,
    )
    .await
    .map_err(|source| HandlerError::FetchUser { username, source })?;

    Ok(Json(user))
}
