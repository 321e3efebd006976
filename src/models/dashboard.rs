//! Dashboard statistics

use serde::{Deserialize, Serialize};

use super::session::StudySession;

/// Response of `GET /dashboard/stats`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total_study_sessions: u64,
    pub total_words_learned: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_study_time_minutes: u64,
    pub average_session_score: f64,
    #[serde(default)]
    pub recent_sessions: Vec<StudySession>,
    pub mastery_distribution: MasteryDistribution,
}

impl DashboardStats {
    /// Total study time rounded to whole hours
    pub fn study_time_hours(&self) -> u64 {
        (self.total_study_time_minutes as f64 / 60.0).round() as u64
    }
}

/// Word counts per mastery bucket
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MasteryDistribution {
    pub beginner: u64,
    pub intermediate: u64,
    pub advanced: u64,
    pub mastered: u64,
}

impl MasteryDistribution {
    pub fn total(&self) -> u64 {
        self.beginner + self.intermediate + self.advanced + self.mastered
    }
}

/// Response of the server's `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self.status.as_str(), "healthy" | "ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_total() {
        let dist = MasteryDistribution {
            beginner: 10,
            intermediate: 5,
            advanced: 3,
            mastered: 2,
        };
        assert_eq!(dist.total(), 20);
    }

    #[test]
    fn test_health_status() {
        let health: HealthStatus = serde_json::from_str(r#"{"status":"healthy","version":"1.0.0"}"#).unwrap();
        assert!(health.is_healthy());

        let health: HealthStatus = serde_json::from_str(r#"{"status":"degraded"}"#).unwrap();
        assert!(!health.is_healthy());
        assert!(health.version.is_none());
    }
}
