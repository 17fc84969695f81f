use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::modules::calendar::use_cases::create_event::inbound::http as create_http;
use crate::modules::calendar::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::calendar::use_cases::list_events::inbound::http as list_http;
use crate::modules::calendar::use_cases::update_event::inbound::http as update_http;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::build_schema(state.clone());

    Router::new()
        .route("/api/create_event", post(create_http::handle))
        .route("/api/update_event", post(update_http::handle))
        .route("/api/delete_event", post(delete_http::handle))
        .route("/api/events_for_day", get(list_http::day))
        .route("/api/events_for_week", get(list_http::week))
        .route("/api/events_for_month", get(list_http::month))
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                // 503 is the routine answer for an unknown user or event.
                .on_failure(DefaultOnFailure::new().level(Level::WARN)),
        )
        .with_state(state)
}
