//! Vocabulary word records and mastery tracking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vocabulary entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Word {
    pub id: String,
    pub japanese: String,
    pub reading: String,
    pub english: String,
    pub part_of_speech: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jlpt_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Mastery score, 0-100
    pub mastery_level: f64,
    pub correct_count: u32,
    pub incorrect_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_practiced: Option<DateTime<Utc>>,
}

impl Word {
    /// Mastery bucket for display
    pub fn mastery(&self) -> MasteryLevel {
        MasteryLevel::from_score(self.mastery_level)
    }

    /// Share of correct answers, `None` if the word was never practiced
    pub fn accuracy_percent(&self) -> Option<u32> {
        let attempts = self.correct_count + self.incorrect_count;
        if attempts == 0 {
            return None;
        }
        Some((self.correct_count as f64 / attempts as f64 * 100.0).round() as u32)
    }
}

/// Mastery buckets used by the dashboard and word lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MasteryLevel {
    Beginner,
    Intermediate,
    Advanced,
    Mastered,
}

impl MasteryLevel {
    /// Bucket a 0-100 mastery score
    pub fn from_score(level: f64) -> Self {
        if level >= 80.0 {
            MasteryLevel::Mastered
        } else if level >= 60.0 {
            MasteryLevel::Advanced
        } else if level >= 40.0 {
            MasteryLevel::Intermediate
        } else {
            MasteryLevel::Beginner
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MasteryLevel::Beginner => "Beginner",
            MasteryLevel::Intermediate => "Intermediate",
            MasteryLevel::Advanced => "Advanced",
            MasteryLevel::Mastered => "Mastered",
        }
    }
}

impl std::fmt::Display for MasteryLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Optional filters for `GET /words`
///
/// Empty strings are treated the same as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WordFilters {
    pub search: Option<String>,
    pub jlpt_level: Option<String>,
    pub part_of_speech: Option<String>,
    pub group_id: Option<String>,
}

impl WordFilters {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn jlpt_level(mut self, level: impl Into<String>) -> Self {
        self.jlpt_level = Some(level.into());
        self
    }

    pub fn part_of_speech(mut self, pos: impl Into<String>) -> Self {
        self.part_of_speech = Some(pos.into());
        self
    }

    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Non-empty filters as query pairs, in a stable order
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        [
            ("search", &self.search),
            ("jlpt_level", &self.jlpt_level),
            ("part_of_speech", &self.part_of_speech),
            ("group_id", &self.group_id),
        ]
        .into_iter()
        .filter_map(|(key, value)| match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Some((key, v.to_string())),
            _ => None,
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }
}

/// Payload for `POST /words`
#[derive(Debug, Clone, Serialize)]
pub struct NewWord {
    pub japanese: String,
    pub reading: String,
    pub english: String,
    pub part_of_speech: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jlpt_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_rank: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// Partial payload for `PUT /words/{id}`
#[derive(Debug, Clone, Default, Serialize)]
pub struct WordUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub japanese: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jlpt_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_rank: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}
