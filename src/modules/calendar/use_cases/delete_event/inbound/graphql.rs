use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteEventMutation;

#[Object]
impl DeleteEventMutation {
    async fn delete_event(
        &self,
        context: &Context<'_>,
        user_id: i64,
        event_id: i64,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state.store.delete(user_id, event_id).await?;
        Ok(true)
    }
}
