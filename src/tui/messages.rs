//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::api::{Review, SiteSettings, StorefrontError};

use super::state::{FooterSection, RatingFilter};

/// Messages for the storefront TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Select the previous card on the page.
    CursorUp,
    /// Select the next card on the page.
    CursorDown,
    /// Show the previous page.
    PreviousPage,
    /// Show the next page.
    NextPage,
    /// Show the first page.
    FirstPage,
    /// Show the last page.
    LastPage,

    // Filter changes
    /// Apply a rating filter.
    SetFilter(RatingFilter),
    /// Advance to the next filter in selector order.
    CycleFilter,

    // Review interactions
    /// Expand or collapse the selected card's comment.
    ToggleComment,
    /// Open the zoom overlay on the selected card's images.
    OpenZoom,
    /// Show the next zoomed image.
    ZoomNext,
    /// Show the previous zoomed image.
    ZoomPrevious,
    /// Close the zoom overlay.
    CloseZoom,

    // Footer
    /// Open or close a footer section.
    ToggleSection(FooterSection),

    // Data loading
    /// Request a refresh of review data from the API.
    RefreshRequested,
    /// Reviews arrived.
    ReviewsLoaded(Vec<Review>),
    /// The review fetch failed.
    ReviewsFailed(String),
    /// Site settings arrived.
    SettingsLoaded(SiteSettings),
    /// The settings fetch failed.
    SettingsFailed(String),

    // Application lifecycle
    /// Synthetic startup message that triggers the initial fetches.
    Initialized,
    /// Move focus to the other panel.
    SwitchPanel,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Creates a review failure message from a `StorefrontError`.
    #[must_use]
    pub fn from_error(error: &StorefrontError) -> Self {
        Self::ReviewsFailed(error.to_string())
    }

    /// Returns true for page and cursor movement.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PreviousPage
                | Self::NextPage
                | Self::FirstPage
                | Self::LastPage
        )
    }

    /// Returns true for filter changes.
    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(self, Self::SetFilter(_) | Self::CycleFilter)
    }

    /// Returns true for comment expansion and zoom messages.
    #[must_use]
    pub const fn is_review_action(&self) -> bool {
        matches!(
            self,
            Self::ToggleComment
                | Self::OpenZoom
                | Self::ZoomNext
                | Self::ZoomPrevious
                | Self::CloseZoom
        )
    }

    /// Returns true for footer messages.
    #[must_use]
    pub const fn is_footer(&self) -> bool {
        matches!(self, Self::ToggleSection(_))
    }

    /// Returns true for fetch requests and results.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::RefreshRequested
                | Self::ReviewsLoaded(_)
                | Self::ReviewsFailed(_)
                | Self::SettingsLoaded(_)
                | Self::SettingsFailed(_)
        )
    }
}
