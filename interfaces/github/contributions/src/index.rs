use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use url::Url;

const CONTRIBUTION_CALENDAR_QUERY: &str = r#"
    query getUserContributionCalendar($login: String!) {
        user(login: $login) {
            contributionsCollection {
                contributionCalendar {
                    totalContributions
                    weeks {
                        contributionDays {
                            contributionCount
                            weekday
                            date
                        }
                    }
                }
            }
        }
    }
"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    pub total_contributions: u64,
    pub weeks: Vec<ContributionWeek>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    pub contribution_days: Vec<ContributionDay>,
}

/// `weekday` is 0 for Sunday through 6 for Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub contribution_count: u64,
    pub weekday: u8,
    pub date: NaiveDate,
}

#[derive(Deserialize)]
struct GraphQLResponse {
    data: Option<ResponseData>,
    errors: Option<Vec<GraphQLError>>,
}

#[derive(Deserialize)]
struct ResponseData {
    user: Option<UserNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserNode {
    contributions_collection: ContributionsCollection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    contribution_calendar: ContributionCalendar,
}

#[derive(Deserialize)]
struct GraphQLError {
    message: String,
}

pub async fn fetch_contribution_calendar(
    client: &Client,
    base_url: &str,
    user_agent: &str,
    token: Option<&str>,
    login: &str,
) -> Result<ContributionCalendar, FetchContributionCalendarError> {
    let url = graphql_url(base_url)?;

    let mut request = client
        .post(url)
        .header("Content-Type", "application/json")
        .header("User-Agent", user_agent)
        .json(&graphql_payload(login));

    if let Some(token) = token {
        request = request.header("Authorization", format!("Bearer {token}"));
    }

    let response = request
        .send()
        .await
        .map_err(|source| FetchContributionCalendarError::RequestSend { source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchContributionCalendarError::UnexpectedStatus { status });
    }

    let body = response
        .text()
        .await
        .map_err(|source| FetchContributionCalendarError::ResponseRead { source })?;

    extract_contribution_calendar(&body, login)
}

/// Request body for the calendar query. The login only ever travels as a variable.
pub fn graphql_payload(login: &str) -> Value {
    serde_json::json!({
        "query": CONTRIBUTION_CALENDAR_QUERY,
        "variables": {
            "login": login,
        }
    })
}

/// Pulls `data.user.contributionsCollection.contributionCalendar` out of a GraphQL response body.
pub fn extract_contribution_calendar(
    body: &str,
    login: &str,
) -> Result<ContributionCalendar, FetchContributionCalendarError> {
    let parsed: GraphQLResponse = serde_json::from_str(body)
        .map_err(|source| FetchContributionCalendarError::DeserializeResponseBody { source })?;

    let calendar = parsed
        .data
        .and_then(|data| data.user)
        .map(|user| user.contributions_collection.contribution_calendar);

    if let Some(calendar) = calendar {
        return Ok(calendar);
    }

    match parsed.errors.filter(|errors| !errors.is_empty()) {
        Some(errors) => {
            let messages = errors
                .into_iter()
                .map(|error| error.message)
                .collect::<Vec<_>>()
                .join("; ");
            Err(FetchContributionCalendarError::GraphQLErrors { messages })
        }
        None => Err(FetchContributionCalendarError::UserFieldMissing {
            login: login.to_string(),
        }),
    }
}

fn graphql_url(base_url: &str) -> Result<Url, FetchContributionCalendarError> {
    let mut url = Url::parse(base_url)
        .map_err(|source| FetchContributionCalendarError::InvalidBaseUrl { source })?;

    url.path_segments_mut()
        .map_err(|_| FetchContributionCalendarError::BaseUrlCannotBeABase {
            base_url: base_url.to_string(),
        })?
        .pop_if_empty()
        .push("graphql");

    Ok(url)
}

#[derive(Debug, Error)]
pub enum FetchContributionCalendarError {
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

    #[error("GraphQLErrors: {messages}")]
    GraphQLErrors {
        messages: String,
    },

    #[error("UserFieldMissing: {login}")]
    UserFieldMissing {
        login: String,
    },
}
