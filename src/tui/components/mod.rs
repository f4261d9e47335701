//! UI components for the storefront TUI.
//!
//! Components are stateless renderers following the bubbletea-rs
//! Model-View pattern: the application model owns the state and passes a
//! view context to each component's `view` function.

pub(crate) mod ansi;
mod footer;
mod image_gallery;
mod review_card;
mod review_list;
mod text_truncate;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use footer::{
    BRAND_NAME, COPYRIGHT, FooterComponent, FooterLink, FooterViewContext, LinkTarget,
    render_link, section_key, section_links, social_icons,
};
pub use image_gallery::{
    AVATAR_FALLBACK_URL, IMAGE_FALLBACK_URL, ZoomViewContext, image_url, thumbnails_line,
    usable_url_or, zoom_view,
};
pub use review_card::{
    ANONYMOUS_AUTHOR, ReviewCardComponent, ReviewCardViewContext, author_name,
    format_review_date, star_bar,
};
pub use review_list::{
    EMPTY_MESSAGE, ERROR_MESSAGE, LOADING_MESSAGE, REVIEW_PANEL_TITLE, ReviewListComponent,
    ReviewListViewContext, ReviewPanelBody, pagination_control,
};
pub use text_truncate::{
    CommentPreview, CommentToggle, MAX_COMMENT_CHARS, preview_comment, wrap_words,
};
