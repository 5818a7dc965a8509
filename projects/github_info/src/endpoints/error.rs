use serde::Serialize;

/// JSON error body shared by the GitHub endpoints: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}
