use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single calendar entry owned by one user.
///
/// `id` and `user_id` identify the record inside the store and are never
/// rewritten by an update; `date`, `title` and `content` are replaceable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub user_id: i64,
    pub date: DateTime<Utc>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Empty content is stored as no content.
pub fn normalize_content(content: Option<String>) -> Option<String> {
    content.filter(|text| !text.is_empty())
}
