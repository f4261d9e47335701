//! Test utilities for TUI component tests.
//!
//! Provides common helpers used across multiple test modules.

use super::ansi;

/// Strips styling and hyperlink escapes from a string.
///
/// Used in tests to verify text content without interference from
/// terminal formatting or OSC 8 link targets.
///
/// # Example
///
/// ```
/// use storefront::tui::components::test_utils::strip_ansi_codes;
///
/// let linked = "\x1b]8;;https://shop.example\x1b\\shop\x1b]8;;\x1b\\";
/// assert_eq!(strip_ansi_codes(linked), "shop");
/// ```
#[must_use]
pub fn strip_ansi_codes(s: &str) -> String {
    ansi::strip(s)
}

/// Visible lines of a rendered frame with trailing padding removed.
#[must_use]
pub fn visible_lines(s: &str) -> Vec<String> {
    strip_ansi_codes(s)
        .lines()
        .map(|line| line.trim_end().to_owned())
        .collect()
}
