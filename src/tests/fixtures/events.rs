// Shared test fixtures for calendar events.

use crate::modules::calendar::core::event::Event;
use chrono::{DateTime, TimeZone, Utc};

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .expect("valid fixture date")
}

pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new() -> Self {
        Self {
            inner: Event {
                id: 1,
                user_id: 1,
                date: at(2024, 1, 15, 0, 0, 0),
                title: "Standup".to_string(),
                content: Some("Daily sync".to_string()),
            },
        }
    }

    pub fn id(mut self, v: i64) -> Self {
        self.inner.id = v;
        self
    }

    pub fn user_id(mut self, v: i64) -> Self {
        self.inner.user_id = v;
        self
    }

    pub fn date(mut self, v: DateTime<Utc>) -> Self {
        self.inner.date = v;
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn content(mut self, v: Option<String>) -> Self {
        self.inner.content = v;
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }
}
