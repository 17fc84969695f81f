use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::calendar::core::event::normalize_content;
use crate::shared::http::answer::Answer;
use crate::shared::http::request_error::{RequestError, require_date};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateEventBody {
    pub user_id: i64,
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Serialize)]
pub struct CreateEventResponse {
    pub id: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateEventBody>, JsonRejection>,
) -> Result<impl IntoResponse, RequestError> {
    let Json(body) = body.map_err(|rejection| RequestError::InvalidBody(rejection.body_text()))?;
    let date = require_date(&body.date)?;

    let id = state
        .store
        .create(body.user_id, date, body.title, normalize_content(body.content))
        .await?;

    Ok(Answer::result(CreateEventResponse { id }).respond(StatusCode::CREATED))
}
