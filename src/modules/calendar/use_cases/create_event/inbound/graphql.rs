use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::calendar::core::event::normalize_content;
use crate::shared::core::dates::parse_calendar_date;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateEventMutation;

#[Object]
impl CreateEventMutation {
    async fn create_event(
        &self,
        context: &Context<'_>,
        user_id: i64,
        date: String,
        title: String,
        content: Option<String>,
    ) -> GqlResult<i64> {
        let state = context.data_unchecked::<AppState>();
        let date = parse_calendar_date(&date)?;

        let id = state
            .store
            .create(user_id, date, title, normalize_content(content))
            .await?;

        Ok(id)
    }
}
