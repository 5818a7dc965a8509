use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;

/// Shared by every handler through an `Extension` layer.
#[derive(Clone)]
pub struct AppState {
    pub http: Client,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().build()?;

        Ok(Self::with_client(config, http))
    }

    pub fn with_client(config: Config, http: Client) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }
}
