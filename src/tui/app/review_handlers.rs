//! Review panel handlers: paging, cursor, filter, expansion, and zoom.

use bubbletea_rs::Cmd;

use super::StorefrontApp;
use crate::tui::components::preview_comment;
use crate::tui::messages::AppMsg;
use crate::tui::state::RatingFilter;

impl StorefrontApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let count = self.filtered_count();
        match msg {
            AppMsg::CursorUp => self.review_state.cursor_up(),
            AppMsg::CursorDown => self.review_state.cursor_down(count),
            AppMsg::PreviousPage => self.review_state.previous_page(count),
            AppMsg::NextPage => self.review_state.next_page(count),
            AppMsg::FirstPage => self.review_state.go_to_page(1, count),
            AppMsg::LastPage => self.review_state.last_page(count),
            _ => {
                // Unreachable: caller filters to navigation messages.
            }
        }
        None
    }

    /// Dispatches filter messages to their handlers.
    pub(super) fn handle_filter_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SetFilter(filter) => self.apply_filter(*filter),
            AppMsg::CycleFilter => self.apply_filter(self.review_state.filter().cycle()),
            _ => {
                // Unreachable: caller filters to filter messages.
            }
        }
        None
    }

    /// Dispatches comment expansion and zoom messages.
    pub(super) fn handle_review_action_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ToggleComment => self.handle_toggle_comment(),
            AppMsg::OpenZoom => self.handle_open_zoom(),
            AppMsg::ZoomNext => self.review_state.zoom_next(),
            AppMsg::ZoomPrevious => self.review_state.zoom_previous(),
            AppMsg::CloseZoom => self.review_state.close_zoom(),
            _ => {
                // Unreachable: caller filters to review actions.
            }
        }
        None
    }

    /// Applies a filter, resetting to the first page and card.
    fn apply_filter(&mut self, filter: RatingFilter) {
        self.review_state.set_filter(filter);
        self.rebuild_filter_cache();
    }

    /// Expands or collapses the selected card when its comment is long.
    fn handle_toggle_comment(&mut self) {
        let Some(review) = self.selected_review() else {
            return;
        };
        if preview_comment(&review.comment, false).toggle.is_none() {
            return;
        }
        let id = review.id.clone();
        self.review_state.toggle_expanded(&id);
    }

    /// Opens the zoom overlay on the selected card's images.
    fn handle_open_zoom(&mut self) {
        let Some(review) = self.selected_review() else {
            return;
        };
        let id = review.id.clone();
        let image_count = review.images.len();
        self.review_state.open_zoom(&id, image_count);
    }
}
