//! Common display utilities

/// Truncate to `max_len` characters with an ellipsis. Counts characters
/// rather than bytes so rules text with non-ASCII never splits a char.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
