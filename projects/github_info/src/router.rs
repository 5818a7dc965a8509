use axum::{routing::get, Extension, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    endpoints::{
        github::{
            contributions::index::handler as github_contributions_handler,
            user::index::handler as github_user_handler,
        },
        welcome::index::handler as welcome_handler,
    },
    state::AppState,
};

/// Every route, with request tracing and a permissive CORS policy on top.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/github/{username}", get(github_user_handler))
        .route("/github/{username}/contributions", get(github_contributions_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
