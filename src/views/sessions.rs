//! Study session views

use crate::models::StudySession;

use super::{bar, pad};

pub fn render_table(sessions: &[StudySession]) -> String {
    let mut lines = vec![
        format!(
            "{:<10} {:<20} {:<17} {:>8} {:>9}",
            "ID", "Activity", "Completed", "Score", "Duration"
        ),
        "-".repeat(68),
    ];

    for session in sessions {
        lines.push(format!(
            "{} {} {:<17} {:>7}% {:>5} min",
            pad(&session.id, 10),
            pad(&session.activity_name, 20),
            session.completed_at.format("%Y-%m-%d %H:%M"),
            session.accuracy_percent(),
            session.duration_minutes()
        ));
    }

    lines.join("\n")
}

pub fn render_detail(session: &StudySession) -> String {
    let accuracy = session.accuracy_percent();
    let mut lines = vec![
        format!("Session {} - {}", session.id, session.activity_name),
        format!(
            "  Score:    {} / {} correct ({}%) {}",
            session.correct_answers,
            session.total_questions,
            accuracy,
            bar(accuracy as f64, 100.0, 20)
        ),
        format!("  Duration: {} min", session.duration_minutes()),
        format!("  Started:  {}", session.started_at.format("%Y-%m-%d %H:%M")),
        format!("  Finished: {}", session.completed_at.format("%Y-%m-%d %H:%M")),
    ];

    if !session.words_practiced.is_empty() {
        lines.push(format!("  Words practiced ({}):", session.words_practiced.len()));
        for word in &session.words_practiced {
            lines.push(format!("    {} ({}) - {}", word.japanese, word.reading, word.english));
        }
    }

    lines.join("\n")
}
