// Port for the calendar event store.
//
// Responsibilities
// - Describe the CRUD and range-query operations transports rely on.
// - Define the structured errors those operations return. Rendering them for
//   a particular transport is the caller's job.

use crate::modules::calendar::core::event::Event;
use crate::modules::calendar::core::period::Period;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundScope {
    User,
    Event,
}

impl fmt::Display for NotFoundScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NotFoundScope::User => "user",
            NotFoundScope::Event => "event",
        })
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("user_id must be a positive integer, got {0}")]
    NonPositiveUserId(i64),

    #[error("title must not be empty")]
    EmptyTitle,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{scope} {id} not found")]
    NotFound { scope: NotFoundScope, id: i64 },
}

impl EventStoreError {
    pub fn user_not_found(user_id: i64) -> Self {
        Self::NotFound {
            scope: NotFoundScope::User,
            id: user_id,
        }
    }

    pub fn event_not_found(event_id: i64) -> Self {
        Self::NotFound {
            scope: NotFoundScope::Event,
            id: event_id,
        }
    }
}

/// Checks applied to every record before it may enter the store.
pub fn validate_record(user_id: i64, title: &str) -> Result<(), ValidationError> {
    if user_id <= 0 {
        return Err(ValidationError::NonPositiveUserId(user_id));
    }
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}

#[async_trait]
pub trait EventStore: Send + Sync {
    /// Stores a new event and returns its id. Ids are unique across all users.
    async fn create(
        &self,
        user_id: i64,
        date: DateTime<Utc>,
        title: String,
        content: Option<String>,
    ) -> Result<i64, EventStoreError>;

    /// Replaces date, title and content of the event keyed by `event.user_id`
    /// and `event.id`.
    async fn update(&self, event: Event) -> Result<(), EventStoreError>;

    async fn delete(&self, user_id: i64, event_id: i64) -> Result<(), EventStoreError>;

    /// Events of `user_id` inside the period containing `date`, in insertion order.
    async fn get_for_period(
        &self,
        user_id: i64,
        date: DateTime<Utc>,
        period: Period,
    ) -> Result<Vec<Event>, EventStoreError>;

    async fn get_for_day(
        &self,
        user_id: i64,
        date: DateTime<Utc>,
    ) -> Result<Vec<Event>, EventStoreError> {
        self.get_for_period(user_id, date, Period::Day).await
    }

    async fn get_for_week(
        &self,
        user_id: i64,
        date: DateTime<Utc>,
    ) -> Result<Vec<Event>, EventStoreError> {
        self.get_for_period(user_id, date, Period::Week).await
    }

    async fn get_for_month(
        &self,
        user_id: i64,
        date: DateTime<Utc>,
    ) -> Result<Vec<Event>, EventStoreError> {
        self.get_for_period(user_id, date, Period::Month).await
    }
}
