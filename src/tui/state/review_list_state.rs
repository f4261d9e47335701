//! Selection, paging, expansion, and zoom state for the review list.
//!
//! The state never owns reviews. Callers pass the size of the filtered list
//! so that paging stays consistent with whatever data is currently loaded.

use std::collections::HashSet;

use super::pagination::{clamp_page, page_count, page_range};
use super::review_filter::RatingFilter;

/// Image zoom overlay for one review's gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomState {
    review_id: String,
    image_index: usize,
    image_count: usize,
}

impl ZoomState {
    /// The review whose images are shown.
    #[must_use]
    pub fn review_id(&self) -> &str {
        &self.review_id
    }

    /// Index of the image currently shown.
    #[must_use]
    pub const fn image_index(&self) -> usize {
        self.image_index
    }

    /// Number of images in the gallery.
    #[must_use]
    pub const fn image_count(&self) -> usize {
        self.image_count
    }

    /// Advances to the next image, wrapping to the first.
    pub const fn next(&mut self) {
        self.image_index = (self.image_index + 1).rem_euclid(self.image_count);
    }

    /// Steps back to the previous image, wrapping to the last.
    pub const fn previous(&mut self) {
        self.image_index = if self.image_index == 0 {
            self.image_count - 1
        } else {
            self.image_index - 1
        };
    }
}

/// UI state of the review list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewListState {
    filter: RatingFilter,
    page: usize,
    cursor: usize,
    expanded: HashSet<String>,
    zoom: Option<ZoomState>,
}

impl Default for ReviewListState {
    fn default() -> Self {
        Self {
            filter: RatingFilter::All,
            page: 1,
            cursor: 0,
            expanded: HashSet::new(),
            zoom: None,
        }
    }
}

impl ReviewListState {
    /// Creates state showing page 1 of all reviews.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active filter.
    #[must_use]
    pub const fn filter(&self) -> RatingFilter {
        self.filter
    }

    /// The current 1-based page.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Selected card position within the current page.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The open zoom overlay, if any.
    #[must_use]
    pub const fn zoom(&self) -> Option<&ZoomState> {
        self.zoom.as_ref()
    }

    /// Applies a filter, returning to page 1 and the first card.
    pub fn set_filter(&mut self, filter: RatingFilter) {
        self.filter = filter;
        self.page = 1;
        self.cursor = 0;
        self.zoom = None;
    }

    /// Moves to `page`, clamped to the pages available for `item_count`.
    pub fn go_to_page(&mut self, page: usize, item_count: usize) {
        let target = clamp_page(page, item_count);
        if target != self.page {
            self.page = target;
            self.cursor = 0;
        }
    }

    /// Moves to the following page when there is one.
    pub fn next_page(&mut self, item_count: usize) {
        self.go_to_page(self.page.saturating_add(1), item_count);
    }

    /// Moves to the preceding page when there is one.
    pub fn previous_page(&mut self, item_count: usize) {
        self.go_to_page(self.page.saturating_sub(1), item_count);
    }

    /// Moves to the last page.
    pub fn last_page(&mut self, item_count: usize) {
        self.go_to_page(page_count(item_count), item_count);
    }

    /// Selects the next card on the page.
    pub fn cursor_down(&mut self, item_count: usize) {
        let on_page = page_range(self.page, item_count).len();
        if self.cursor.saturating_add(1) < on_page {
            self.cursor += 1;
        }
    }

    /// Selects the previous card on the page.
    pub const fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Clamps page and cursor after the underlying list changed size.
    pub fn clamp(&mut self, item_count: usize) {
        self.page = clamp_page(self.page, item_count);
        let on_page = page_range(self.page, item_count).len();
        self.cursor = self.cursor.min(on_page.saturating_sub(1));
    }

    /// The slice of `filtered` shown on the current page.
    #[must_use]
    pub fn visible<'a>(&self, filtered: &'a [usize]) -> &'a [usize] {
        filtered
            .get(page_range(self.page, filtered.len()))
            .unwrap_or_default()
    }

    /// Index into the full review list of the selected card.
    #[must_use]
    pub fn selected(&self, filtered: &[usize]) -> Option<usize> {
        self.visible(filtered).get(self.cursor).copied()
    }

    /// Flips whether the review's full comment is shown.
    ///
    /// Returns the new expansion state. Expansion is remembered across page
    /// and filter changes.
    pub fn toggle_expanded(&mut self, review_id: &str) -> bool {
        if self.expanded.remove(review_id) {
            false
        } else {
            self.expanded.insert(review_id.to_owned());
            true
        }
    }

    /// Returns true if the review's full comment is shown.
    #[must_use]
    pub fn is_expanded(&self, review_id: &str) -> bool {
        self.expanded.contains(review_id)
    }

    /// Opens the zoom overlay on a review's first image.
    ///
    /// Does nothing when the review has no images.
    pub fn open_zoom(&mut self, review_id: &str, image_count: usize) {
        if image_count == 0 {
            return;
        }
        self.zoom = Some(ZoomState {
            review_id: review_id.to_owned(),
            image_index: 0,
            image_count,
        });
    }

    /// Fits the open zoom overlay to its review's current image count.
    ///
    /// The overlay closes when the review no longer has images; otherwise the
    /// shown image is clamped to the last one.
    pub fn resize_zoom(&mut self, image_count: usize) {
        if image_count == 0 {
            self.zoom = None;
            return;
        }
        if let Some(zoom) = self.zoom.as_mut() {
            zoom.image_count = image_count;
            zoom.image_index = zoom.image_index.min(image_count - 1);
        }
    }

    /// Closes the zoom overlay.
    pub fn close_zoom(&mut self) {
        self.zoom = None;
    }

    /// Shows the next zoomed image.
    pub fn zoom_next(&mut self) {
        if let Some(zoom) = self.zoom.as_mut() {
            zoom.next();
        }
    }

    /// Shows the previous zoomed image.
    pub fn zoom_previous(&mut self) {
        if let Some(zoom) = self.zoom.as_mut() {
            zoom.previous();
        }
    }
}
