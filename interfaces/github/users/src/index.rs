use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use url::Url;

pub async fn fetch_user(
    client: &Client,
    base_url: &str,
    user_agent: &str,
    username: &str,
) -> Result<Value, FetchUserError> {
    let url = user_url(base_url, username)?;

    let response = client
        .get(url)
        .header("Accept", "application/vnd.github+json")
        .header("User-Agent", user_agent)
        .send()
        .await
        .map_err(|source| FetchUserError::RequestSend { source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchUserError::UnexpectedStatus { status });
    }

    let body = response
        .text()
        .await
        .map_err(|source| FetchUserError::ResponseRead { source })?;

    serde_json::from_str(&body).map_err(|source| FetchUserError::DeserializeResponseBody { source })
}

/// `{base_url}/users/{username}`, with `username` encoded as one path segment.
pub fn user_url(base_url: &str, username: &str) -> Result<Url, FetchUserError> {
    let mut url = Url::parse(base_url).map_err(|source| FetchUserError::InvalidBaseUrl { source })?;

    url.path_segments_mut()
        .map_err(|_| FetchUserError::BaseUrlCannotBeABase {
            base_url: base_url.to_string(),
        })?
        .pop_if_empty()
        .push("users")
        .push(username);

    Ok(url)
}

#[derive(Debug, Error)]
pub enum FetchUserError {
    #[error("InvalidBaseUrl: {source}")]
    InvalidBaseUrl {
        source: url::ParseError,
    },

    #[error("BaseUrlCannotBeABase: {base_url}")]
    BaseUrlCannotBeABase {
        base_url: String,
    },

    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("UnexpectedStatus: {status}")]
    UnexpectedStatus {
        status: StatusCode,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },

    #[error("DeserializeResponseBody: {source}")]
    DeserializeResponseBody {
        source: serde_json::Error,
    },
}
