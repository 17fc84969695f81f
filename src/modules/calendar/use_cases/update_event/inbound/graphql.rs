use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::calendar::core::event::{Event, normalize_content};
use crate::shared::core::dates::parse_calendar_date;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateEventMutation;

#[Object]
impl UpdateEventMutation {
    async fn update_event(
        &self,
        context: &Context<'_>,
        id: i64,
        user_id: i64,
        date: String,
        title: String,
        content: Option<String>,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let event = Event {
            id,
            user_id,
            date: parse_calendar_date(&date)?,
            title,
            content: normalize_content(content),
        };

        state.store.update(event).await?;
        Ok(true)
    }
}
