//! Vocabulary views

use crate::models::Word;

use super::pad;

/// Word table: japanese, reading, english, part of speech, JLPT, mastery
pub fn render_table(words: &[Word]) -> String {
    let mut lines = vec![
        format!(
            "{:<12} {:<14} {:<24} {:<12} {:<5} {}",
            "Japanese", "Reading", "English", "Type", "JLPT", "Mastery"
        ),
        "-".repeat(84),
    ];

    for word in words {
        lines.push(format!(
            "{} {} {} {} {:<5} {} ({:.0}%)",
            pad(&word.japanese, 12),
            pad(&word.reading, 14),
            pad(&word.english, 24),
            pad(&word.part_of_speech, 12),
            word.jlpt_level.as_deref().unwrap_or("-"),
            word.mastery(),
            word.mastery_level
        ));
    }

    lines.join("\n")
}

/// Single word card
pub fn render_detail(word: &Word) -> String {
    let mut lines = vec![
        format!("{} ({})", word.japanese, word.reading),
        format!("  English:        {}", word.english),
        format!("  Part of speech: {}", word.part_of_speech),
        format!("  JLPT level:     {}", word.jlpt_level.as_deref().unwrap_or("-")),
        format!("  Mastery:        {} ({:.0}%)", word.mastery(), word.mastery_level),
        format!(
            "  Answers:        {} correct / {} incorrect",
            word.correct_count, word.incorrect_count
        ),
    ];

    if let Some(accuracy) = word.accuracy_percent() {
        lines.push(format!("  Accuracy:       {}%", accuracy));
    }
    if let Some(rank) = word.frequency_rank {
        lines.push(format!("  Frequency rank: {}", rank));
    }
    if let Some(group) = &word.group_id {
        lines.push(format!("  Group:          {}", group));
    }
    lines.push(format!(
        "  Last practiced: {}",
        word.last_practiced
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "never".to_string())
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::word::tests::sample_word;

    #[test]
    fn test_table_shows_mastery_label() {
        let out = render_table(&[sample_word("w1", 85.0), sample_word("w2", 10.0)]);
        assert!(out.contains("Mastered (85%)"));
        assert!(out.contains("Beginner (10%)"));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn test_table_aligns_double_width_columns() {
        let mut word = sample_word("w1", 50.0);
        word.japanese = "cat".to_string();
        let out = render_table(&[sample_word("w0", 50.0), word]);

        let rows: Vec<&str> = out.lines().skip(2).collect();
        assert!(rows[0].starts_with(&format!("猫{} ねこ", " ".repeat(10))));
        assert!(rows[1].starts_with(&format!("cat{} ねこ", " ".repeat(9))));
    }

    #[test]
    fn test_detail() {
        let out = render_detail(&sample_word("w1", 45.0));
        assert!(out.starts_with("猫 (ねこ)"));
        assert!(out.contains("Intermediate (45%)"));
        assert!(out.contains("Accuracy:       75%"));
        assert!(out.contains("Last practiced: never"));
    }
}
