//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! storefront TUI. It coordinates the review and footer panels, owns the
//! fetched data, and handles async loading.
//!
//! # Module Structure
//!
//! - `model_impl`: `bubbletea_rs::Model` implementation and viewport fitting
//! - `rendering`: View rendering methods for terminal output
//! - `review_handlers`: Navigation, filter, expansion, and zoom handlers
//! - `footer_handlers`: Footer section toggles
//! - `data_handlers`: Fetch commands and their results
//! - `lifecycle_handlers`: Startup, focus, help, and resize handling

use bubbletea_rs::Cmd;
use url::Url;

use crate::api::{Review, SiteSettings};

use super::messages::AppMsg;
use super::state::{LoadStatus, RatingFilter, ReviewListState, SectionToggles};

mod data_handlers;
mod footer_handlers;
mod lifecycle_handlers;
mod model_impl;
mod rendering;
mod review_handlers;

/// Rows reserved for the header and status bar.
pub(crate) const CHROME_HEIGHT: usize = 2;

/// Panel that receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    /// The review list.
    #[default]
    Reviews,
    /// The site footer.
    Footer,
}

impl Panel {
    /// The other panel.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Reviews => Self::Footer,
            Self::Footer => Self::Reviews,
        }
    }

    /// Tab label in the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reviews => "Reviews",
            Self::Footer => "Footer",
        }
    }
}

/// Main application model for the storefront TUI.
#[derive(Debug)]
pub struct StorefrontApp {
    /// All fetched reviews (unfiltered).
    pub(crate) reviews: Vec<Review>,
    /// Cached indices of reviews matching the current filter.
    /// Invalidated when reviews or filter change.
    filtered_indices: Vec<usize>,
    /// Filter, page, cursor, expansion, and zoom state.
    pub(crate) review_state: ReviewListState,
    /// Fetch status of the reviews.
    pub(crate) review_status: LoadStatus,
    /// Site settings; defaults until a fetch succeeds.
    pub(crate) settings: SiteSettings,
    /// Fetch status of the settings.
    pub(crate) settings_status: LoadStatus,
    /// Footer section toggles.
    pub(crate) toggles: SectionToggles,
    /// Focused panel.
    pub(crate) panel: Panel,
    /// Storefront root used to resolve footer routes.
    site_url: Option<Url>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Tracks whether the startup message has been handled.
    has_initialized: bool,
}

impl StorefrontApp {
    /// Creates an application showing already fetched reviews.
    #[must_use]
    pub fn new(reviews: Vec<Review>) -> Self {
        let filtered_indices = RatingFilter::All.apply(&reviews);
        Self {
            reviews,
            filtered_indices,
            review_state: ReviewListState::new(),
            review_status: LoadStatus::Ready,
            settings: SiteSettings::default(),
            settings_status: LoadStatus::Loading,
            toggles: SectionToggles::default(),
            panel: Panel::Reviews,
            site_url: None,
            width: 80,
            height: 24,
            show_help: false,
            has_initialized: false,
        }
    }

    /// Creates an application waiting for its first fetch.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            review_status: LoadStatus::Loading,
            ..Self::new(Vec::new())
        }
    }

    /// Sets the storefront root used to resolve footer routes.
    #[must_use]
    pub fn with_site_url(mut self, site_url: Option<Url>) -> Self {
        self.site_url = site_url;
        self
    }

    /// Sets the terminal dimensions.
    #[must_use]
    pub const fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Returns the currently filtered reviews.
    #[must_use]
    pub fn filtered_reviews(&self) -> Vec<&Review> {
        self.filtered_indices
            .iter()
            .filter_map(|&index| self.reviews.get(index))
            .collect()
    }

    /// Returns the count of filtered reviews.
    #[must_use]
    pub const fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Returns the reviews shown on the current page.
    #[must_use]
    pub fn page_reviews(&self) -> Vec<&Review> {
        self.review_state
            .visible(&self.filtered_indices)
            .iter()
            .filter_map(|&index| self.reviews.get(index))
            .collect()
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn active_filter(&self) -> RatingFilter {
        self.review_state.filter()
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.review_state.page()
    }

    /// Returns the cursor position within the page.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.review_state.cursor()
    }

    /// Returns the review under the cursor, if any.
    #[must_use]
    pub fn selected_review(&self) -> Option<&Review> {
        self.review_state
            .selected(&self.filtered_indices)
            .and_then(|index| self.reviews.get(index))
    }

    /// Returns the focused panel.
    #[must_use]
    pub const fn panel(&self) -> Panel {
        self.panel
    }

    /// Returns the review fetch status.
    #[must_use]
    pub const fn review_status(&self) -> &LoadStatus {
        &self.review_status
    }

    /// Returns the current site settings.
    #[must_use]
    pub const fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Returns the footer section toggles.
    #[must_use]
    pub const fn section_toggles(&self) -> &SectionToggles {
        &self.toggles
    }

    /// Rebuilds the filtered indices cache based on the current filter.
    ///
    /// Call this after modifying `reviews` or changing the active filter.
    pub(crate) fn rebuild_filter_cache(&mut self) {
        self.filtered_indices = self.review_state.filter().apply(&self.reviews);
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. It delegates to specialised
    /// handlers for each message category to keep cyclomatic complexity low.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_filter() {
            return self.handle_filter_msg(msg);
        }
        if msg.is_review_action() {
            return self.handle_review_action_msg(msg);
        }
        if msg.is_footer() {
            return self.handle_footer_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }
}
