//! Study activity views

use crate::models::StudyActivity;

use super::{pad, truncate};

pub fn render_list(activities: &[StudyActivity]) -> String {
    if activities.is_empty() {
        return "No study activities found.".to_string();
    }

    let mut lines = vec![
        format!("{:<10} {:<24} {:<11} {:<13} {}", "ID", "Name", "Type", "Difficulty", "Description"),
        "-".repeat(90),
    ];

    for activity in activities {
        lines.push(format!(
            "{} {} {:<11} {:<13} {}",
            pad(&activity.id, 10),
            pad(&activity.name, 24),
            activity.activity_type,
            activity.difficulty,
            truncate(&activity.description, 30)
        ));
    }

    lines.join("\n")
}

pub fn render_detail(activity: &StudyActivity) -> String {
    let mut lines = vec![
        format!("{} [{} / {}]", activity.name, activity.activity_type, activity.difficulty),
        format!("  {}", activity.description),
    ];
    if let Some(thumbnail) = &activity.thumbnail {
        lines.push(format!("  Thumbnail: {}", thumbnail));
    }
    lines.push(format!("  Created:   {}", activity.created_at.format("%Y-%m-%d")));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityType, Difficulty};

    fn activity() -> StudyActivity {
        StudyActivity {
            id: "a1".to_string(),
            name: "Flashcards".to_string(),
            description: "Drill vocabulary with spaced repetition".to_string(),
            activity_type: ActivityType::Vocabulary,
            thumbnail: None,
            difficulty: Difficulty::Beginner,
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            updated_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_list() {
        let out = render_list(&[activity()]);
        assert!(out.contains("vocabulary"));
        assert!(out.contains("beginner"));
        assert_eq!(render_list(&[]), "No study activities found.");
    }

    #[test]
    fn test_detail() {
        let out = render_detail(&activity());
        assert!(out.starts_with("Flashcards [vocabulary / beginner]"));
        assert!(!out.contains("Thumbnail"));
    }
}
