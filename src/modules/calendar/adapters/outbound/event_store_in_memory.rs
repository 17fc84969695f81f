// In memory implementation of the EventStore port.
//
// Responsibilities
// - Keep one bucket of events per user, in insertion order.
// - Allocate ids from a single counter shared by all users.
// - Serialize mutations and let range queries read concurrently.

use crate::modules::calendar::core::event::Event;
use crate::modules::calendar::core::event_store::{EventStore, EventStoreError, validate_record};
use crate::modules::calendar::core::period::Period;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

// Table and counter sit behind the same lock so an id is only ever handed
// out together with the append that uses it.
#[derive(Debug)]
struct Calendar {
    events: HashMap<i64, Vec<Event>>,
    next_id: i64,
}

impl Default for Calendar {
    fn default() -> Self {
        Self {
            events: HashMap::new(),
            next_id: 1,
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    inner: RwLock<Calendar>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn create(
        &self,
        user_id: i64,
        date: DateTime<Utc>,
        title: String,
        content: Option<String>,
    ) -> Result<i64, EventStoreError> {
        validate_record(user_id, &title)?;

        let mut guard = self.inner.write().await;
        let calendar = &mut *guard;
        let id = calendar.next_id;
        calendar.events.entry(user_id).or_default().push(Event {
            id,
            user_id,
            date,
            title,
            content,
        });
        calendar.next_id += 1;

        debug!(user_id, event_id = id, "event created");
        Ok(id)
    }

    async fn update(&self, event: Event) -> Result<(), EventStoreError> {
        validate_record(event.user_id, &event.title)?;

        let mut calendar = self.inner.write().await;
        let bucket = calendar
            .events
            .get_mut(&event.user_id)
            .ok_or(EventStoreError::user_not_found(event.user_id))?;
        let stored = bucket
            .iter_mut()
            .find(|stored| stored.id == event.id)
            .ok_or(EventStoreError::event_not_found(event.id))?;

        stored.date = event.date;
        stored.title = event.title;
        stored.content = event.content;

        debug!(user_id = event.user_id, event_id = event.id, "event updated");
        Ok(())
    }

    async fn delete(&self, user_id: i64, event_id: i64) -> Result<(), EventStoreError> {
        let mut calendar = self.inner.write().await;
        let bucket = calendar
            .events
            .get_mut(&user_id)
            .ok_or(EventStoreError::user_not_found(user_id))?;
        let position = bucket
            .iter()
            .position(|stored| stored.id == event_id)
            .ok_or(EventStoreError::event_not_found(event_id))?;

        // `remove` shifts the tail, keeping survivors in insertion order.
        bucket.remove(position);

        debug!(user_id, event_id, "event deleted");
        Ok(())
    }

    async fn get_for_period(
        &self,
        user_id: i64,
        date: DateTime<Utc>,
        period: Period,
    ) -> Result<Vec<Event>, EventStoreError> {
        let range = period.range_containing(date);

        let calendar = self.inner.read().await;
        let bucket = calendar
            .events
            .get(&user_id)
            .ok_or(EventStoreError::user_not_found(user_id))?;

        Ok(bucket
            .iter()
            .filter(|event| range.contains(event.date))
            .cloned()
            .collect())
    }
}
