//! Message text for a revealed record.

use crate::record::Record;

/// Link appended to rendered records unless configured otherwise.
pub const DEFAULT_REFERENCE_URL: &str = "http://pravo.minjust.ru/extremist-materials";

/// Renders `record` as legacy-Markdown text: heading, title, labelled date line and optional reference link.
pub fn render_record(record: &Record, reference_url: Option<&str>) -> String {
    let mut text = format!(
        "💀 **Случайный экстремистский материал:**\n\n{}\n\n📅 **Дата включения:** {}",
        record.title(),
        record.date()
    );
    if let Some(url) = reference_url.filter(|u| !u.is_empty()) {
        text.push_str("\n\n");
        text.push_str(url);
    }
    text
}

/// Cuts `s` to at most `max` characters, appending `...` when shortened. Used for log fields.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}...", &s[..byte_idx]),
        None => s.to_string(),
    }
}
