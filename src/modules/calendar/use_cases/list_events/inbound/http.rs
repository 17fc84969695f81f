use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::calendar::core::period::Period;
use crate::shared::http::answer::Answer;
use crate::shared::http::request_error::{RequestError, require_date, require_id_param};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListEventsParams {
    pub user_id: Option<String>,
    pub date: Option<String>,
}

pub async fn day(
    state: State<AppState>,
    params: Result<Query<ListEventsParams>, QueryRejection>,
) -> Result<impl IntoResponse, RequestError> {
    handle(state, params, Period::Day).await
}

pub async fn week(
    state: State<AppState>,
    params: Result<Query<ListEventsParams>, QueryRejection>,
) -> Result<impl IntoResponse, RequestError> {
    handle(state, params, Period::Week).await
}

pub async fn month(
    state: State<AppState>,
    params: Result<Query<ListEventsParams>, QueryRejection>,
) -> Result<impl IntoResponse, RequestError> {
    handle(state, params, Period::Month).await
}

async fn handle(
    State(state): State<AppState>,
    params: Result<Query<ListEventsParams>, QueryRejection>,
    period: Period,
) -> Result<impl IntoResponse, RequestError> {
    let Query(params) =
        params.map_err(|rejection| RequestError::InvalidQuery(rejection.body_text()))?;
    let user_id = require_id_param("user_id", params.user_id.as_deref())?;
    let raw_date = params
        .date
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .ok_or(RequestError::MissingParameter("date"))?;
    let date = require_date(raw_date)?;

    let events = state.store.get_for_period(user_id, date, period).await?;

    Ok(Answer::result(events).respond(StatusCode::OK))
}
