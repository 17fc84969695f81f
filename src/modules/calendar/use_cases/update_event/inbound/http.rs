use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::calendar::core::event::{Event, normalize_content};
use crate::shared::http::answer::Answer;
use crate::shared::http::request_error::{RequestError, require_date, require_positive};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateEventBody {
    pub id: i64,
    pub user_id: i64,
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<UpdateEventBody>, JsonRejection>,
) -> Result<impl IntoResponse, RequestError> {
    let Json(body) = body.map_err(|rejection| RequestError::InvalidBody(rejection.body_text()))?;
    let date = require_date(&body.date)?;

    let event = Event {
        id: require_positive("id", body.id)?,
        user_id: body.user_id,
        date,
        title: body.title,
        content: normalize_content(body.content),
    };
    state.store.update(event).await?;

    Ok(Answer::result("event updated").respond(StatusCode::OK))
}
