pub const USAGE: &str = "Welcome to the GitHub Info API!\n\n\
Available Endpoints:\n\
1. /github/:username - Retrieve basic information about a GitHub user.\n\
2. /github/:username/contributions - Retrieve contribution details for a GitHub user.\n\n\
Replace ':username' with the GitHub username you want to query.";

/// Axum handler: GET /
pub async fn handler() -> &'static str {
    USAGE
}
