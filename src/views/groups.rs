//! Word group views

use crate::models::WordGroup;

use super::{pad, truncate};

pub fn render_list(groups: &[WordGroup]) -> String {
    if groups.is_empty() {
        return "No groups found.".to_string();
    }

    let mut lines = vec![
        format!("{:<10} {:<20} {:>6} {:>8}  {}", "ID", "Name", "Words", "Mastery", "Description"),
        "-".repeat(80),
    ];

    for group in groups {
        lines.push(format!(
            "{} {} {:>6} {:>7.0}%  {}",
            pad(&group.id, 10),
            pad(&group.name, 20),
            group.word_count,
            group.average_mastery,
            truncate(&group.description, 30)
        ));
    }

    lines.join("\n")
}

pub fn render_detail(group: &WordGroup) -> String {
    [
        group.name.clone(),
        format!("  {}", group.description),
        format!("  Words:           {}", group.word_count),
        format!("  Average mastery: {:.0}%", group.average_mastery),
        format!("  Color:           {}", group.color),
        format!("  Updated:         {}", group.updated_at.format("%Y-%m-%d")),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> WordGroup {
        WordGroup {
            id: "g1".to_string(),
            name: "Food".to_string(),
            description: "Things to eat".to_string(),
            color: "#10b981".to_string(),
            word_count: 12,
            average_mastery: 55.4,
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            updated_at: "2024-01-05T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_list() {
        let out = render_list(&[group()]);
        assert!(out.contains("Food"));
        assert!(out.contains("55%"));
        assert_eq!(render_list(&[]), "No groups found.");
    }

    #[test]
    fn test_detail() {
        let out = render_detail(&group());
        assert!(out.contains("Words:           12"));
        assert!(out.contains("Updated:         2024-01-05"));
    }
}
