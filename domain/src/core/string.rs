//! String helpers used when rendering question previews.

/// Shorten `s` to at most `max_chars` characters, ending with `…` when cut.
///
/// Counts characters rather than bytes so that questions written in
/// non-Latin scripts are not split inside a code point.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(1);
    let mut out: String = s.chars().take(keep).collect();
    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    out.push('…');
    out
}
