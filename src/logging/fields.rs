//! Field helpers for structured logging

/// Preview of prompt or completion text for logging (privacy-safe)
///
/// Returns None if content logging is disabled or the text is blank.
/// When enabled, returns the first ~100 characters with newlines flattened
/// so a preview stays on one log line.
///
/// # Examples
///
/// ```
/// use draftpick::logging::content_preview;
///
/// assert_eq!(content_preview("Champion 1: Ahri - burst", false), None);
/// assert_eq!(
///     content_preview("Champion 1: Ahri\nChampion 2: Zed", true).as_deref(),
///     Some("Champion 1: Ahri Champion 2: Zed")
/// );
/// ```
pub fn content_preview(text: &str, enable_content_logging: bool) -> Option<String> {
    if !enable_content_logging {
        return None;
    }

    let flat: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.is_empty() {
        return None;
    }

    Some(truncate_string(&flat, 100))
}

/// Helper function to truncate a string to a maximum number of characters
fn truncate_string(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        None => s.to_string(),
        Some((idx, _)) => format!("{}...", &s[..idx]),
    }
}
