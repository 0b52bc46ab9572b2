use chrono::{DateTime, Datelike, Local};

/// Short day-month date; the year is added only when it differs from `today`.
/// e.g. `"19 Oct"`, `"3 Jan 2023"`.
pub(crate) fn format_date(date: DateTime<Local>, today: DateTime<Local>) -> String {
    if date.year() == today.year() {
        date.format("%-d %b").to_string()
    } else {
        date.format("%-d %b %Y").to_string()
    }
}

/// Fixed-width text bar for a percentage in 0..=100.
pub(crate) fn progress_bar(percent: f64, width: usize) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Shorten to at most `max` characters, ending in "…" when cut.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    match max {
        0 => String::new(),
        _ if s.chars().count() <= max => s.to_string(),
        _ => {
            let mut out: String = s.chars().take(max - 1).collect();
            out.push('…');
            out
        }
    }
}

/// Move a list cursor by `delta` rows (clamped to the list) and slide the
/// `page`-row window so the cursor stays visible. `isize::MIN`/`isize::MAX`
/// jump to the first/last row.
pub(crate) fn move_cursor(
    index: &mut usize,
    scroll: &mut usize,
    len: usize,
    page: usize,
    delta: isize,
) {
    if len == 0 {
        *index = 0;
        *scroll = 0;
        return;
    }
    let last = (len - 1) as isize;
    *index = (*index as isize).saturating_add(delta).clamp(0, last) as usize;

    let page = page.max(1);
    if *index < *scroll {
        *scroll = *index;
    } else if *index >= *scroll + page {
        *scroll = *index + 1 - page;
    }
}
