//! GitHub info relay
//!
//! - HTTP endpoints in `endpoints/`, wired together in `router`
//! - Upstream calls live in the `interfaces_github_*` crates
//! - Reads GITHUB_TOKEN (and friends) once at startup, see `config`

pub mod config;
pub mod endpoints;
pub mod router;
pub mod state;
