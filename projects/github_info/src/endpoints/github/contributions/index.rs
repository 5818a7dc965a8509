use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::IntoResponse,
};
use interfaces_github_contributions::index::{
    fetch_contribution_calendar, ContributionCalendar, FetchContributionCalendarError,
};
use thiserror::Error;
use tracing::error;

use crate::{endpoints::error::ErrorBody, state::AppState};

pub const FAILURE_MESSAGE: &str = "Failed to fetch GitHub contribution data";

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("FetchContributionCalendar {username}: {source}")]
    FetchContributionCalendar {
        username: String,
        #[source]
        source: FetchContributionCalendarError,
    },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        error!(error = %self, "github contributions lookup failed");

        match self {
            HandlerError::FetchContributionCalendar { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody { error: FAILURE_MESSAGE }),
            )
                .into_response(),
        }
    }
}

/// Axum handler: GET /github/{username}/contributions
pub async fn handler(
    Extension(state): Extension<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ContributionCalendar>, HandlerError> {
    let calendar = fetch_contribution_calendar(
        &state.http,
        &state.config.github_api_url,
        &state.config.user_agent,
        state.config.github_token.as_deref(),
        &username,
    )
    .await
    .map_err(|source| HandlerError::FetchContributionCalendar { username, source })?;

    Ok(Json(calendar))
}
