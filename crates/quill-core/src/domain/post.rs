use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a single blog post.
///
/// The id is assigned by the store on creation and never changes; the
/// timestamp is the creation time and is not touched by edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// The shape handed to the store when creating a post.
///
/// The creation timestamp is captured when the `NewPost` is built, not when
/// the row is written.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl NewPost {
    /// Build a new post stamped with the current time.
    pub fn new(title: String, content: String) -> Self {
        Self {
            title,
            content,
            timestamp: Utc::now(),
        }
    }
}
