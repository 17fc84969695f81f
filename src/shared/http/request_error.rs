use axum::{http::StatusCode, response::IntoResponse, response::Response};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::warn;

use crate::modules::calendar::core::event_store::EventStoreError;
use crate::shared::core::dates::parse_calendar_date;
use crate::shared::http::answer::Answer;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("cannot read request body: {0}")]
    InvalidBody(String),

    #[error("cannot read query string: {0}")]
    InvalidQuery(String),

    #[error("parameter {0} is required")]
    MissingParameter(&'static str),

    #[error("{0} must be a positive integer")]
    NotPositive(&'static str),

    #[error("invalid date {0:?}, use YYYY-MM-DD")]
    InvalidDate(String),

    #[error(transparent)]
    Store(#[from] EventStoreError),
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::Store(EventStoreError::NotFound { .. }) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, error = %self, "request rejected");
        Answer::<()>::error(self.to_string()).respond(status)
    }
}

pub fn require_positive(field: &'static str, value: i64) -> Result<i64, RequestError> {
    if value <= 0 {
        return Err(RequestError::NotPositive(field));
    }
    Ok(value)
}

pub fn require_date(raw: &str) -> Result<DateTime<Utc>, RequestError> {
    parse_calendar_date(raw).map_err(|_| RequestError::InvalidDate(raw.to_string()))
}

/// Parses a required positive integer query parameter.
pub fn require_id_param(field: &'static str, raw: Option<&str>) -> Result<i64, RequestError> {
    let raw = raw.ok_or(RequestError::MissingParameter(field))?;
    let value = raw
        .parse::<i64>()
        .map_err(|_| RequestError::NotPositive(field))?;
    require_positive(field, value)
}
