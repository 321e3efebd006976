//! Study session records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::word::Word;

/// A completed (or in-progress) run of a study activity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudySession {
    pub id: String,
    pub activity_id: String,
    pub activity_name: String,
    pub score: f64,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub duration_seconds: u64,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    #[serde(default)]
    pub words_practiced: Vec<Word>,
}

impl StudySession {
    /// Share of correct answers as a whole percentage.
    ///
    /// Sessions without questions report 0.
    pub fn accuracy_percent(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        (self.correct_answers as f64 / self.total_questions as f64 * 100.0).round() as u32
    }

    /// Session length rounded to whole minutes
    pub fn duration_minutes(&self) -> u64 {
        (self.duration_seconds as f64 / 60.0).round() as u64
    }
}

/// Payload for `POST /study_sessions`
#[derive(Debug, Clone, Serialize)]
pub struct NewStudySession {
    pub activity_id: String,
    pub activity_name: String,
    pub score: f64,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub duration_seconds: u64,
    #[serde(default)]
    pub words_practiced: Vec<Word>,
}

/// Partial payload for `PUT /study_sessions/{id}`
#[derive(Debug, Clone, Default, Serialize)]
pub struct StudySessionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}
