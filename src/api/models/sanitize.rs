//! Control-character scrubbing for backend-supplied text.
//!
//! Comments, names, and settings values end up in terminal output. Any C0 or
//! C1 control character in them would start an escape sequence, so they are
//! removed before the text reaches a domain type or a rendered frame.

/// Drops control characters, keeping line breaks. Tabs become spaces.
#[must_use]
pub fn multiline(text: &str) -> String {
    scrub(text, true)
}

/// Drops control characters, line breaks included. Tabs become spaces.
#[must_use]
pub fn single_line(text: &str) -> String {
    scrub(text, false)
}

/// Returns true when `url` can be embedded in an OSC 8 hyperlink.
#[must_use]
pub fn is_safe_url(url: &str) -> bool {
    !url.chars().any(char::is_control)
}

fn scrub(text: &str, keep_newlines: bool) -> String {
    text.chars()
        .filter_map(|ch| match ch {
            '\t' => Some(' '),
            '\n' if keep_newlines => Some('\n'),
            other if other.is_control() => None,
            other => Some(other),
        })
        .collect()
}
