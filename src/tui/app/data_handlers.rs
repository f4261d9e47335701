//! Fetch commands and result handlers for the storefront TUI.
//!
//! Reviews and site settings load through independent commands so that a
//! slow or failing settings fetch never holds back the review panel. Manual
//! refresh re-issues the review fetch and retries settings only when their
//! last fetch failed; otherwise the settings cache keeps serving them.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::StorefrontApp;
use crate::api::{Review, SiteSettings};
use crate::tui::messages::AppMsg;
use crate::tui::state::LoadStatus;

impl StorefrontApp {
    /// Dispatches data loading messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RefreshRequested => self.handle_refresh_requested(),
            AppMsg::ReviewsLoaded(reviews) => {
                self.apply_reviews(reviews);
                None
            }
            AppMsg::ReviewsFailed(message) => {
                self.review_status = LoadStatus::Failed(message.clone());
                None
            }
            AppMsg::SettingsLoaded(settings) => {
                self.apply_settings(settings);
                None
            }
            AppMsg::SettingsFailed(message) => {
                self.settings_status = LoadStatus::Failed(message.clone());
                None
            }
            _ => {
                // Unreachable: caller filters to data messages.
                None
            }
        }
    }

    /// Handles a manual refresh request.
    ///
    /// Ignored while a review fetch is already in flight.
    pub(super) fn handle_refresh_requested(&mut self) -> Option<Cmd> {
        if self.review_status.is_loading() {
            return None;
        }

        self.review_status = LoadStatus::Loading;
        if self.settings_status.error().is_some() {
            self.settings_status = LoadStatus::Loading;
            return Some(Self::initial_fetch_cmd());
        }
        Some(Self::fetch_reviews_cmd())
    }

    /// Replaces the reviews and clamps paging to the new result set.
    ///
    /// Expansion state is kept. An open zoom overlay is fitted to its
    /// review's new gallery, and closed when the review or its images are
    /// gone.
    pub(crate) fn apply_reviews(&mut self, reviews: &[Review]) {
        self.reviews = reviews.to_vec();
        self.rebuild_filter_cache();
        self.review_state.clamp(self.filtered_count());

        if let Some(zoom) = self.review_state.zoom() {
            let image_count = self
                .reviews
                .iter()
                .find(|review| review.id == zoom.review_id())
                .map_or(0, |review| review.images.len());
            self.review_state.resize_zoom(image_count);
        }

        self.review_status = LoadStatus::Ready;
    }

    /// Stores freshly fetched settings.
    pub(crate) fn apply_settings(&mut self, settings: &SiteSettings) {
        self.settings = settings.clone();
        self.settings_status = LoadStatus::Ready;
    }

    /// Creates a command that fetches reviews through the fetch context.
    pub(super) fn fetch_reviews_cmd() -> Cmd {
        Box::pin(async {
            let msg = match crate::tui::fetch_reviews().await {
                Ok(reviews) => AppMsg::ReviewsLoaded(reviews),
                Err(error) => AppMsg::from_error(&error),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }

    /// Creates a command that fetches site settings through the fetch context.
    pub(super) fn fetch_settings_cmd() -> Cmd {
        Box::pin(async {
            let msg = match crate::tui::fetch_site_settings().await {
                Ok(settings) => AppMsg::SettingsLoaded(settings),
                Err(error) => AppMsg::SettingsFailed(error.to_string()),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }

    /// Creates a command that runs both fetches concurrently.
    pub(super) fn initial_fetch_cmd() -> Cmd {
        bubbletea_rs::batch(vec![Self::fetch_reviews_cmd(), Self::fetch_settings_cmd()])
    }

    /// Creates a command that emits `Initialized` immediately.
    ///
    /// This synthetic startup event triggers the first render cycle without
    /// waiting for user input.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }
}
