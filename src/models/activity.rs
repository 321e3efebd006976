//! Study activity records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A study activity offered by the portal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyActivity {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub difficulty: Difficulty,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Kind of practice an activity provides
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Vocabulary,
    Grammar,
    Kanji,
    Reading,
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityType::Vocabulary => write!(f, "vocabulary"),
            ActivityType::Grammar => write!(f, "grammar"),
            ActivityType::Kanji => write!(f, "kanji"),
            ActivityType::Reading => write!(f, "reading"),
        }
    }
}

impl std::str::FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vocabulary" => Ok(ActivityType::Vocabulary),
            "grammar" => Ok(ActivityType::Grammar),
            "kanji" => Ok(ActivityType::Kanji),
            "reading" => Ok(ActivityType::Reading),
            _ => Err(format!(
                "Unknown activity type '{}'. Valid: vocabulary, grammar, kanji, reading",
                s
            )),
        }
    }
}

/// Difficulty tier of an activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(format!(
                "Unknown difficulty '{}'. Valid: beginner, intermediate, advanced",
                s
            )),
        }
    }
}

/// Payload for `POST /study_activities`
#[derive(Debug, Clone, Serialize)]
pub struct NewStudyActivity {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub difficulty: Difficulty,
}

/// Partial payload for `PUT /study_activities/{id}`
#[derive(Debug, Clone, Default, Serialize)]
pub struct StudyActivityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<ActivityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_activity() {
        let json = r#"{
            "id": "a1",
            "name": "Flashcards",
            "description": "Drill vocabulary",
            "type": "vocabulary",
            "difficulty": "beginner",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z"
        }"#;

        let activity: StudyActivity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.activity_type, ActivityType::Vocabulary);
        assert_eq!(activity.difficulty, Difficulty::Beginner);
        assert!(activity.thumbnail.is_none());
    }

    #[test]
    fn test_update_skips_absent_fields() {
        let update = StudyActivityUpdate {
            difficulty: Some(Difficulty::Advanced),
            ..Default::default()
        };

        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, serde_json::json!({ "difficulty": "advanced" }));
    }

    #[test]
    fn test_parse_activity_type() {
        assert_eq!("Kanji".parse::<ActivityType>().unwrap(), ActivityType::Kanji);
        assert!("cooking".parse::<ActivityType>().is_err());
    }
}
