//! Dashboard view: stat cards, recent performance and mastery distribution

use crate::models::DashboardStats;

use super::bar;

const CHART_WIDTH: usize = 30;

/// Full dashboard
pub fn render(stats: &DashboardStats) -> String {
    let mut out = vec![
        "Dashboard".to_string(),
        "Track your Japanese learning progress".to_string(),
        String::new(),
        stat_line("Study Sessions", stats.total_study_sessions.to_string()),
        stat_line("Words Learned", stats.total_words_learned.to_string()),
        stat_line("Current Streak", format!("{} days", stats.current_streak)),
        stat_line("Longest Streak", format!("{} days", stats.longest_streak)),
        stat_line("Study Time", format!("{}h", stats.study_time_hours())),
        stat_line("Average Score", format!("{:.0}%", stats.average_session_score)),
        String::new(),
    ];

    out.extend(recent_performance(stats));
    out.push(String::new());
    out.extend(mastery_distribution(stats));

    out.join("\n")
}

fn stat_line(title: &str, value: String) -> String {
    format!("  {:<16} {}", title, value)
}

/// Score bars for the seven most recent sessions
fn recent_performance(stats: &DashboardStats) -> Vec<String> {
    let mut lines = vec!["Recent Performance".to_string()];

    if stats.recent_sessions.is_empty() {
        lines.push("  No sessions yet".to_string());
        return lines;
    }

    for session in stats.recent_sessions.iter().take(7) {
        let score = session.accuracy_percent();
        lines.push(format!(
            "  {:<7} {:<width$} {:>3}%  {} min",
            session.completed_at.format("%b %-d"),
            bar(score as f64, 100.0, CHART_WIDTH),
            score,
            session.duration_minutes(),
            width = CHART_WIDTH
        ));
    }

    lines
}

fn mastery_distribution(stats: &DashboardStats) -> Vec<String> {
    let dist = &stats.mastery_distribution;
    let max = [dist.beginner, dist.intermediate, dist.advanced, dist.mastered]
        .into_iter()
        .max()
        .unwrap_or(0) as f64;

    let mut lines = vec!["Mastery Distribution".to_string()];
    for (name, value) in [
        ("Beginner", dist.beginner),
        ("Intermediate", dist.intermediate),
        ("Advanced", dist.advanced),
        ("Mastered", dist.mastered),
    ] {
        lines.push(format!(
            "  {:<13} {:<width$} {}",
            name,
            bar(value as f64, max, CHART_WIDTH),
            value,
            width = CHART_WIDTH
        ));
    }

    lines
}
