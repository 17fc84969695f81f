use async_graphql::{Context, Object, Result as GqlResult};
use chrono::SecondsFormat;

use crate::modules::calendar::core::event::Event;
use crate::modules::calendar::core::period::Period;
use crate::shared::core::dates::parse_calendar_date;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlEvent {
    pub id: i64,
    pub user_id: i64,
    pub date: String,
    pub title: String,
    pub content: Option<String>,
}

impl From<Event> for GqlEvent {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            user_id: e.user_id,
            date: e.date.to_rfc3339_opts(SecondsFormat::Secs, true),
            title: e.title,
            content: e.content,
        }
    }
}

async fn events_for(
    context: &Context<'_>,
    user_id: i64,
    date: &str,
    period: Period,
) -> GqlResult<Vec<GqlEvent>> {
    let state = context.data_unchecked::<AppState>();
    let date = parse_calendar_date(date)?;
    let events = state.store.get_for_period(user_id, date, period).await?;
    Ok(events.into_iter().map(Into::into).collect())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn events_for_day(
        &self,
        context: &Context<'_>,
        user_id: i64,
        date: String,
    ) -> GqlResult<Vec<GqlEvent>> {
        events_for(context, user_id, &date, Period::Day).await
    }

    async fn events_for_week(
        &self,
        context: &Context<'_>,
        user_id: i64,
        date: String,
    ) -> GqlResult<Vec<GqlEvent>> {
        events_for(context, user_id, &date, Period::Week).await
    }

    async fn events_for_month(
        &self,
        context: &Context<'_>,
        user_id: i64,
        date: String,
    ) -> GqlResult<Vec<GqlEvent>> {
        events_for(context, user_id, &date, Period::Month).await
    }
}
