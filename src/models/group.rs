//! Word group records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named collection of words
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordGroup {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub word_count: u32,
    pub average_mastery: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /groups`
#[derive(Debug, Clone, Serialize)]
pub struct NewWordGroup {
    pub name: String,
    pub description: String,
    pub color: String,
}

/// Partial payload for `PUT /groups/{id}`
#[derive(Debug, Clone, Default, Serialize)]
pub struct WordGroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
