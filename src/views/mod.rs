//! Terminal Views
//!
//! Renderers for the dashboard, vocabulary, groups, activities and
//! sessions. Each view takes the state of the resource backing it and
//! returns the text to print:
//!
//! - pending → a loading line
//! - failed → `Error: <message>`
//! - ready → cards, tables and bar charts

pub mod activities;
pub mod dashboard;
pub mod groups;
pub mod sessions;
pub mod words;

use crate::fetch::{FetchState, PageSnapshot};

/// Render a single-request view, delegating the ready case to `render`
pub fn render_state<T>(state: &FetchState<T>, what: &str, render: impl FnOnce(&T) -> String) -> String {
    match state {
        FetchState::Pending => format!("Loading {}...", what),
        FetchState::Failed(message) => format!("Error: {}", message),
        FetchState::Ready(data) => render(data),
    }
}

/// Render a paginated view. Errors are shown above whatever page is still
/// held.
pub fn render_page<T>(snapshot: &PageSnapshot<T>, what: &str, render: impl FnOnce(&[T]) -> String) -> String {
    let mut out = Vec::new();

    if let Some(message) = &snapshot.error {
        out.push(format!("Error: {}", message));
    }

    if snapshot.loading && snapshot.items.is_empty() {
        out.push(format!("Loading {}...", what));
    } else if snapshot.items.is_empty() {
        if snapshot.error.is_none() {
            out.push(format!("No {} found.", what));
        }
    } else {
        out.push(render(&snapshot.items));
        out.push(String::new());
        out.push(pager(snapshot));
    }

    out.join("\n")
}

/// `Page 2 of 5 (95 total)`
pub fn pager<T>(snapshot: &PageSnapshot<T>) -> String {
    format!(
        "Page {} of {} ({} total)",
        snapshot.page,
        snapshot.total_pages.max(1),
        snapshot.total
    )
}

/// Horizontal bar scaled so that `max` fills `width` cells
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.min(width))
}

/// Terminal columns taken by `c`: kana, CJK ideographs, Hangul and
/// fullwidth forms take two.
fn char_width(c: char) -> usize {
    match c as u32 {
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x20000..=0x3FFFD => 2,
        _ => 1,
    }
}

pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Cut `s` to at most `max` columns, marking the cut with `…`
pub fn truncate(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }

    let budget = max.saturating_sub(1);
    let mut used = 0;
    let mut kept = String::new();
    for c in s.chars() {
        let w = char_width(c);
        if used + w > budget {
            break;
        }
        used += w;
        kept.push(c);
    }
    format!("{}…", kept)
}

/// Truncate and left-align `s` in a column `width` cells wide.
///
/// `format!("{:<n}")` pads by character count, which misaligns
/// double-width text.
pub fn pad(s: &str, width: usize) -> String {
    let cut = truncate(s, width);
    let fill = width.saturating_sub(display_width(&cut));
    format!("{}{}", cut, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(items: Vec<u32>, error: Option<&str>, loading: bool) -> PageSnapshot<u32> {
        PageSnapshot {
            total: items.len() as u64,
            items,
            page: 1,
            per_page: 10,
            total_pages: 1,
            loading,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_render_state_variants() {
        let pending: FetchState<u32> = FetchState::Pending;
        assert_eq!(render_state(&pending, "dashboard", |_| unreachable!()), "Loading dashboard...");

        let failed: FetchState<u32> = FetchState::Failed("boom".to_string());
        assert_eq!(render_state(&failed, "dashboard", |_| unreachable!()), "Error: boom");

        let ready = FetchState::Ready(3);
        assert_eq!(render_state(&ready, "dashboard", |n| n.to_string()), "3");
    }

    #[test]
    fn test_render_page_empty() {
        let out = render_page(&snapshot(vec![], None, false), "words", |_| unreachable!());
        assert_eq!(out, "No words found.");
    }

    #[test]
    fn test_render_page_error_keeps_items() {
        let out = render_page(&snapshot(vec![1, 2], Some("timeout"), false), "words", |items| {
            format!("{} items", items.len())
        });
        assert!(out.starts_with("Error: timeout"));
        assert!(out.contains("2 items"));
        assert!(out.contains("Page 1 of 1 (2 total)"));
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(50.0, 100.0, 10), "█████");
        assert_eq!(bar(0.0, 100.0, 10), "");
        assert_eq!(bar(200.0, 100.0, 10).chars().count(), 10);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long description", 6), "a lon…");
        assert_eq!(truncate("いただきます", 6), "いた…");
    }

    #[test]
    fn test_pad_by_display_width() {
        assert_eq!(display_width("猫"), 2);
        assert_eq!(display_width("ねこ cat"), 8);
        assert_eq!(pad("猫", 6), "猫    ");
        assert_eq!(pad("cat", 6), "cat   ");
        assert_eq!(pad("食べ物を食べる", 8), "食べ物… ");
    }
}
