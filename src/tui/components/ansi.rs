//! Terminal styling and hyperlink escapes, plus width-aware helpers that
//! skip over them.
//!
//! Two escape families appear in rendered frames: CSI sequences
//! (`ESC [ ... final`) for styling and OSC 8 sequences
//! (`ESC ] 8 ; ; url ST`) for hyperlinks. Width calculations ignore both.

use unicode_width::UnicodeWidthChar;

use crate::api::models::sanitize;

/// Resets all styling.
pub const RESET: &str = "\x1b[0m";

const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const REVERSE: &str = "\x1b[7m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

const OSC8_OPEN: &str = "\x1b]8;;";
const STRING_TERMINATOR: &str = "\x1b\\";

/// Renders `text` dimmed.
#[must_use]
pub fn dim(text: &str) -> String {
    format!("{DIM}{text}{RESET}")
}

/// Renders `text` in bold.
#[must_use]
pub fn bold(text: &str) -> String {
    format!("{BOLD}{text}{RESET}")
}

/// Renders `text` with inverted colours, used for the selected card.
#[must_use]
pub fn reverse(text: &str) -> String {
    format!("{REVERSE}{text}{RESET}")
}

/// Renders `text` in yellow, used for stars.
#[must_use]
pub fn yellow(text: &str) -> String {
    format!("{YELLOW}{text}{RESET}")
}

/// Renders `text` in red, used for errors.
#[must_use]
pub fn red(text: &str) -> String {
    format!("{RED}{text}{RESET}")
}

/// Wraps `text` in an OSC 8 hyperlink to `url`.
///
/// Terminals without hyperlink support show the text unchanged. A URL
/// carrying control characters could terminate the escape early, so such
/// links render as bare text.
#[must_use]
pub fn hyperlink(url: &str, text: &str) -> String {
    if !sanitize::is_safe_url(url) {
        return text.to_owned();
    }
    format!("{OSC8_OPEN}{url}{STRING_TERMINATOR}{text}{OSC8_OPEN}{STRING_TERMINATOR}")
}

/// One lexical piece of a styled string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    /// A complete escape sequence, emitted verbatim.
    Escape(&'a str),
    /// A visible character.
    Char(char),
}

/// Splits a styled string into escapes and visible characters.
fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut result = Vec::new();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if ch == '\x1b' {
            let length = escape_length(rest);
            let (escape, tail) = rest.split_at(length);
            result.push(Segment::Escape(escape));
            rest = tail;
        } else {
            result.push(Segment::Char(ch));
            rest = rest.get(ch.len_utf8()..).unwrap_or_default();
        }
    }

    result
}

/// Byte length of the escape sequence at the start of `text`.
///
/// Unterminated sequences extend to the end of the input.
fn escape_length(text: &str) -> usize {
    let mut chars = text.char_indices().skip(1);
    match chars.next() {
        Some((_, '[')) => chars
            .find(|(_, ch)| ('\x40'..='\x7e').contains(ch))
            .map_or(text.len(), |(index, ch)| index + ch.len_utf8()),
        Some((_, ']')) => osc_length(text),
        Some((index, ch)) => index + ch.len_utf8(),
        None => text.len(),
    }
}

fn osc_length(text: &str) -> usize {
    let mut previous_was_escape = false;
    for (index, ch) in text.char_indices().skip(2) {
        if ch == '\x07' {
            return index + 1;
        }
        if previous_was_escape && ch == '\\' {
            return index + 1;
        }
        previous_was_escape = ch == '\x1b';
    }
    text.len()
}

/// Display width of `text`, ignoring escape sequences.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    segments(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Char(ch) => UnicodeWidthChar::width(ch).unwrap_or(0),
            Segment::Escape(_) => 0,
        })
        .sum()
}

/// Removes every escape sequence from `text`.
#[must_use]
pub fn strip(text: &str) -> String {
    segments(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Char(ch) => Some(ch),
            Segment::Escape(_) => None,
        })
        .collect()
}

/// Cuts `line` to `width` columns and pads it with spaces to exactly `width`.
///
/// Escapes are kept intact. When the line carried styling, a reset is
/// appended so that styles cannot bleed into the padding or the next row.
#[must_use]
pub fn fit_to_width(line: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut output = String::with_capacity(line.len().saturating_add(width));
    let mut used = 0usize;
    let mut had_escape = false;

    for segment in segments(line) {
        match segment {
            Segment::Escape(escape) => {
                had_escape = true;
                output.push_str(escape);
            }
            Segment::Char(ch) => {
                let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if used.saturating_add(char_width) > width {
                    break;
                }
                output.push(ch);
                used = used.saturating_add(char_width);
            }
        }
    }

    if had_escape {
        output.push_str(RESET);
        if line.contains(OSC8_OPEN) {
            output.push_str(OSC8_OPEN);
            output.push_str(STRING_TERMINATOR);
        }
    }
    output.push_str(&" ".repeat(width.saturating_sub(used)));
    output
}
