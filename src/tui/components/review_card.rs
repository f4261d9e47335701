//! A single review rendered as a card.
//!
//! Layout:
//!
//! ```text
//! > ◉ Lan                                   09/03/2024
//!   ★★★★☆
//!   Fits perfectly, though the sleeves run a little...  [more]
//!   [img 1] [img 2]
//! ```

use super::ansi;
use super::image_gallery::{AVATAR_FALLBACK_URL, thumbnails_line, usable_url_or};
use super::text_truncate::{preview_comment, truncate_to_display_width_with_ellipsis, wrap_words};
use crate::api::models::{MAX_RATING, Review, sanitize};

/// Name shown when the reviewer's profile was not populated.
pub const ANONYMOUS_AUTHOR: &str = "Customer";

const INDENT: &str = "  ";
const DATE_FORMAT: &str = "%d/%m/%Y";
const DATE_COLUMNS: usize = 10;

/// Context for rendering one review card.
#[derive(Debug, Clone)]
pub struct ReviewCardViewContext<'a> {
    /// Review to render.
    pub review: &'a Review,
    /// Whether the card holds the cursor.
    pub is_selected: bool,
    /// Whether the full comment is shown.
    pub is_expanded: bool,
    /// Available width in columns.
    pub max_width: usize,
}

/// Stateless renderer for review cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewCardComponent;

impl ReviewCardComponent {
    /// Renders the card, one terminal row per line.
    #[must_use]
    pub fn view(ctx: &ReviewCardViewContext<'_>) -> String {
        let mut output = String::new();
        output.push_str(&Self::header_line(ctx));
        output.push('\n');
        output.push_str(INDENT);
        output.push_str(&ansi::yellow(&star_bar(ctx.review.rating)));
        output.push('\n');
        output.push_str(&Self::comment_block(ctx));

        if let Some(thumbnails) = thumbnails_line(ctx.review) {
            output.push_str(INDENT);
            output.push_str(&thumbnails);
            output.push('\n');
        }
        output
    }

    fn header_line(ctx: &ReviewCardViewContext<'_>) -> String {
        let marker = if ctx.is_selected { ">" } else { " " };
        let avatar = ansi::hyperlink(
            usable_url_or(ctx.review.author.avatar_url.as_deref(), AVATAR_FALLBACK_URL),
            "◉",
        );
        let date = format_review_date(ctx.review);

        // marker, space, avatar glyph, space, name, gap, date
        let name_width = ctx
            .max_width
            .saturating_sub(4)
            .saturating_sub(DATE_COLUMNS + 1);
        let name = truncate_to_display_width_with_ellipsis(&author_name(ctx.review), name_width);
        let styled_name = if ctx.is_selected {
            ansi::reverse(&name)
        } else {
            ansi::bold(&name)
        };

        let used = 4 + ansi::visible_width(&name);
        let gap = ctx.max_width.saturating_sub(used + DATE_COLUMNS).max(1);
        format!(
            "{marker} {avatar} {styled_name}{}{}",
            " ".repeat(gap),
            ansi::dim(&date)
        )
    }

    fn comment_block(ctx: &ReviewCardViewContext<'_>) -> String {
        let preview = preview_comment(&sanitize::multiline(&ctx.review.comment), ctx.is_expanded);
        let mut text = preview.text;
        if let Some(toggle) = preview.toggle {
            text.push_str("  ");
            text.push_str(toggle.label());
        }

        let wrap_width = ctx.max_width.saturating_sub(INDENT.len()).max(1);
        let mut output = String::new();
        for line in wrap_words(&text, wrap_width) {
            output.push_str(INDENT);
            output.push_str(&line);
            output.push('\n');
        }
        output
    }
}

/// Reviewer display name with the anonymous fallback, control characters
/// removed.
#[must_use]
pub fn author_name(review: &Review) -> String {
    review
        .author
        .name
        .as_deref()
        .map(sanitize::single_line)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_owned())
}

/// Creation date as `DD/MM/YYYY`, or an empty string when unknown.
#[must_use]
pub fn format_review_date(review: &Review) -> String {
    review
        .created_at
        .map(|timestamp| timestamp.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Filled and empty stars for a rating, capped at five.
#[must_use]
pub fn star_bar(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    let empty = usize::from(MAX_RATING) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}
