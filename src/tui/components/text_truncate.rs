//! Comment truncation and text fitting for review cards.
//!
//! Comment length is measured in characters, matching what a reader counts,
//! while layout helpers measure terminal columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Comments longer than this many characters are collapsed by default.
pub const MAX_COMMENT_CHARS: usize = 50;

/// Toggle rendered after a long comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentToggle {
    /// The comment is collapsed; selecting expands it.
    More,
    /// The comment is expanded; selecting collapses it.
    Less,
}

impl CommentToggle {
    /// Label rendered after the comment text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::More => "[more]",
            Self::Less => "[less]",
        }
    }
}

/// Comment text as it should be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentPreview {
    /// Text to show, already shortened when collapsed.
    pub text: String,
    /// Toggle to show, present only for long comments.
    pub toggle: Option<CommentToggle>,
}

/// Applies the collapse rule to a comment.
///
/// Comments of up to [`MAX_COMMENT_CHARS`] characters show in full with no
/// toggle. Longer comments show their first [`MAX_COMMENT_CHARS`] characters
/// and `...` with a `[more]` toggle, or the full text with `[less]` when
/// expanded.
#[must_use]
pub fn preview_comment(comment: &str, expanded: bool) -> CommentPreview {
    let is_long = comment.chars().nth(MAX_COMMENT_CHARS).is_some();

    if !is_long {
        return CommentPreview {
            text: comment.to_owned(),
            toggle: None,
        };
    }

    if expanded {
        return CommentPreview {
            text: comment.to_owned(),
            toggle: Some(CommentToggle::Less),
        };
    }

    let head: String = comment.chars().take(MAX_COMMENT_CHARS).collect();
    CommentPreview {
        text: format!("{head}..."),
        toggle: Some(CommentToggle::More),
    }
}

/// Truncates text to the provided display width and appends an ellipsis.
///
/// This helper measures width in terminal columns, not Unicode scalar count.
pub(crate) fn truncate_to_display_width_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target_width = max_width.saturating_sub(3);
    let mut truncated = String::new();
    let mut current_width = 0;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        truncated.push(ch);
        current_width += char_width;
    }
    format!("{truncated}...")
}

/// Word-wraps text to `max_width` columns.
///
/// Existing line breaks are kept. Words wider than the limit are split.
#[must_use]
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return text.lines().map(ToOwned::to_owned).collect();
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            push_word(&mut lines, &mut current, word, max_width);
        }
        lines.push(current);
    }
    lines
}

fn push_word(lines: &mut Vec<String>, current: &mut String, word: &str, max_width: usize) {
    let word_width = word.width();
    let needed = if current.is_empty() {
        word_width
    } else {
        current.width() + 1 + word_width
    };

    if needed <= max_width {
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
        return;
    }

    if !current.is_empty() {
        lines.push(std::mem::take(current));
    }

    for ch in word.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current.width() + char_width > max_width {
            lines.push(std::mem::take(current));
        }
        current.push(ch);
    }
}
