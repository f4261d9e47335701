//! Review image thumbnails and the zoom overlay.
//!
//! Images cannot be drawn in a terminal, so each one renders as a numbered
//! label linked to its URL. Unusable URLs are replaced by the placeholder
//! asset so that a broken upload never blocks the card.

use url::Url;

use super::ansi;
use super::review_card::author_name;
use crate::api::models::{Review, ReviewImage, sanitize};
use crate::tui::state::ZoomState;

/// Placeholder shown for missing or unusable image URLs.
pub const IMAGE_FALLBACK_URL: &str = "/images/image-fallback.png";

/// Placeholder shown for missing or unusable avatar URLs.
pub const AVATAR_FALLBACK_URL: &str = "/images/useravt.png";

/// Returns `candidate` when it is an absolute `http(s)` URL, else `fallback`.
#[must_use]
pub fn usable_url_or<'a>(candidate: Option<&'a str>, fallback: &'a str) -> &'a str {
    candidate
        .map(str::trim)
        .filter(|value| {
            sanitize::is_safe_url(value)
                && Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
        })
        .unwrap_or(fallback)
}

/// URL shown for a review image.
#[must_use]
pub fn image_url(image: &ReviewImage) -> &str {
    usable_url_or(image.url.as_deref(), IMAGE_FALLBACK_URL)
}

/// Renders one line of numbered thumbnails, or `None` when there are no images.
#[must_use]
pub fn thumbnails_line(review: &Review) -> Option<String> {
    if review.images.is_empty() {
        return None;
    }

    let labels: Vec<String> = review
        .images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            ansi::hyperlink(image_url(image), &format!("[img {}]", index + 1))
        })
        .collect();
    Some(labels.join(" "))
}

/// Context for rendering the zoom overlay.
#[derive(Debug, Clone)]
pub struct ZoomViewContext<'a> {
    /// Review whose gallery is open.
    pub review: &'a Review,
    /// Overlay position.
    pub zoom: &'a ZoomState,
}

/// Renders the zoom overlay for the current image.
#[must_use]
pub fn zoom_view(ctx: &ZoomViewContext<'_>) -> String {
    let position = ctx.zoom.image_index();
    let url = ctx
        .review
        .images
        .get(position)
        .map_or(IMAGE_FALLBACK_URL, image_url);
    let author = author_name(ctx.review);

    let mut output = String::new();
    output.push_str(&ansi::bold(&format!(
        "Image {} of {} from {author}",
        position + 1,
        ctx.zoom.image_count()
    )));
    output.push_str("\n\n");
    output.push_str("  ");
    output.push_str(&ansi::hyperlink(url, url));
    output.push_str("\n\n");
    output.push_str(&ansi::dim("h/l:previous/next  Esc:close"));
    output.push('\n');
    output
}
