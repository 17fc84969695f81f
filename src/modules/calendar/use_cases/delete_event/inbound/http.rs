use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shared::http::answer::Answer;
use crate::shared::http::request_error::{RequestError, require_positive};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteEventBody {
    pub user_id: i64,
    pub event_id: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DeleteEventBody>, JsonRejection>,
) -> Result<impl IntoResponse, RequestError> {
    let Json(body) = body.map_err(|rejection| RequestError::InvalidBody(rejection.body_text()))?;
    let event_id = require_positive("event_id", body.event_id)?;
    let user_id = require_positive("user_id", body.user_id)?;

    state.store.delete(user_id, event_id).await?;

    Ok(Answer::result("event deleted").respond(StatusCode::OK))
}
