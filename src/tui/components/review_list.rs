//! Review list panel: header, filter, cards, and pagination.
//!
//! The panel renders exactly one of four bodies: a loading notice, an error
//! notice, an empty notice, or the current page of cards followed by the
//! pagination control. The header with the active filter is always shown.
//!
//! When the panel is given a visible height, the header and pagination stay
//! pinned and the cards scroll so the selected card is in view.

use std::ops::Range;

use super::ansi;
use super::review_card::{ReviewCardComponent, ReviewCardViewContext};
use crate::api::models::Review;
use crate::tui::state::{LoadStatus, ReviewListState, page_count};

/// Panel title.
pub const REVIEW_PANEL_TITLE: &str = "Product reviews";

/// Message shown while reviews load.
pub const LOADING_MESSAGE: &str = "Loading reviews...";

/// Message shown when the review fetch failed.
pub const ERROR_MESSAGE: &str = "Failed to load reviews";

/// Message shown when no review passes the filter.
pub const EMPTY_MESSAGE: &str = "No matching reviews yet";

/// Context for rendering the review list view.
///
/// Bundles the data needed to render a filtered page of reviews without
/// copying the review collection.
#[derive(Debug, Clone)]
pub struct ReviewListViewContext<'a> {
    /// Every fetched review.
    pub reviews: &'a [Review],
    /// Indices of reviews matching the current filter.
    pub filtered_indices: &'a [usize],
    /// Filter, page, cursor, and expansion state.
    pub state: &'a ReviewListState,
    /// Fetch status of the reviews.
    pub status: &'a LoadStatus,
    /// Available width in columns.
    pub max_width: usize,
    /// Rows the panel may occupy. `None` renders every line.
    pub visible_height: Option<usize>,
}

/// Which body the panel renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewPanelBody {
    /// The fetch is in flight.
    Loading,
    /// The fetch failed.
    Error,
    /// Nothing passes the filter.
    Empty,
    /// Cards and pagination.
    Content,
}

impl ReviewPanelBody {
    /// Picks the body for a fetch status and filtered count.
    #[must_use]
    pub const fn select(status: &LoadStatus, filtered_count: usize) -> Self {
        match status {
            LoadStatus::Loading => Self::Loading,
            LoadStatus::Failed(_) => Self::Error,
            LoadStatus::Ready if filtered_count == 0 => Self::Empty,
            LoadStatus::Ready => Self::Content,
        }
    }
}

/// Component for displaying the review list panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewListComponent;

impl ReviewListComponent {
    /// Renders the panel as a string.
    #[must_use]
    pub fn view(ctx: &ReviewListViewContext<'_>) -> String {
        let mut output = Self::header(ctx);
        output.push('\n');

        match ReviewPanelBody::select(ctx.status, ctx.filtered_indices.len()) {
            ReviewPanelBody::Loading => {
                output.push_str(&format!("  {LOADING_MESSAGE}\n"));
            }
            ReviewPanelBody::Error => {
                output.push_str(&format!("  {}\n", ansi::red(ERROR_MESSAGE)));
            }
            ReviewPanelBody::Empty => {
                output.push_str(&format!("  {}\n", ansi::dim(EMPTY_MESSAGE)));
            }
            ReviewPanelBody::Content => {
                let pinned_rows = output.lines().count() + 1;
                let cards = Self::cards(ctx);
                let window = ctx
                    .visible_height
                    .map_or(cards.lines.len(), |height| height.saturating_sub(pinned_rows));
                for line in cards.window(window) {
                    output.push_str(line);
                    output.push('\n');
                }
                output.push_str(&pagination_control(
                    ctx.state.page(),
                    page_count(ctx.filtered_indices.len()),
                ));
                output.push('\n');
            }
        }
        output
    }

    fn header(ctx: &ReviewListViewContext<'_>) -> String {
        let label = ctx.state.filter().label();
        let count = ctx.filtered_indices.len();
        let total = ctx.reviews.len();
        format!(
            "{}  Filter: {label} ({count}/{total})\n",
            ansi::bold(REVIEW_PANEL_TITLE)
        )
    }

    fn cards(ctx: &ReviewListViewContext<'_>) -> CardLines {
        let mut cards = CardLines::default();
        for (position, &review_index) in ctx.state.visible(ctx.filtered_indices).iter().enumerate()
        {
            let Some(review) = ctx.reviews.get(review_index) else {
                continue;
            };
            let is_selected = position == ctx.state.cursor();
            let card = ReviewCardViewContext {
                review,
                is_selected,
                is_expanded: ctx.state.is_expanded(&review.id),
                max_width: ctx.max_width,
            };
            let start = cards.lines.len();
            cards
                .lines
                .extend(ReviewCardComponent::view(&card).lines().map(str::to_owned));
            if is_selected {
                cards.selected = start..cards.lines.len();
            }
            cards.lines.push(String::new());
        }
        cards
    }
}

/// Rendered card lines with the row range of the selected card.
#[derive(Debug, Default)]
struct CardLines {
    lines: Vec<String>,
    selected: Range<usize>,
}

impl CardLines {
    /// First line of a `height`-row window that keeps the selected card in
    /// view, showing its top when it is taller than the window.
    fn scroll_offset(&self, height: usize) -> usize {
        if self.selected.end <= height {
            0
        } else {
            self.selected
                .start
                .min(self.selected.end.saturating_sub(height))
        }
    }

    fn window(&self, height: usize) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .skip(self.scroll_offset(height))
            .take(height)
            .map(String::as_str)
    }
}

/// Renders `« 1 [2] 3 »` with the current page bracketed.
///
/// Arrows are dimmed when there is no page in that direction.
#[must_use]
pub fn pagination_control(current: usize, total: usize) -> String {
    let previous = if current > 1 { "«".to_owned() } else { ansi::dim("«") };
    let next = if current < total { "»".to_owned() } else { ansi::dim("»") };
    let pages: Vec<String> = (1..=total)
        .map(|page| {
            if page == current {
                ansi::bold(&format!("[{page}]"))
            } else {
                page.to_string()
            }
        })
        .collect();
    format!("  {previous} {} {next}", pages.join(" "))
}
