pub mod error;
pub mod github;
pub mod welcome;
