//! Footer panel handlers.

use bubbletea_rs::Cmd;

use super::StorefrontApp;
use crate::tui::messages::AppMsg;

impl StorefrontApp {
    /// Dispatches footer messages to their handlers.
    ///
    /// Section toggles are recorded on every viewport; on wide viewports they
    /// take effect once the terminal narrows again.
    pub(super) fn handle_footer_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if let AppMsg::ToggleSection(section) = msg {
            self.toggles.toggle(*section);
        }
        None
    }
}
