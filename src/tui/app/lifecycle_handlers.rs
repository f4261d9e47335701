//! Lifecycle and window handlers for the storefront TUI.
//!
//! This module handles startup initialisation, panel focus, terminal resize
//! events, and high-level lifecycle messages such as quit and help toggling.

use bubbletea_rs::Cmd;

use super::StorefrontApp;
use crate::tui::messages::AppMsg;

impl StorefrontApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => self.handle_initialized(),
            AppMsg::SwitchPanel => {
                self.panel = self.panel.toggled();
                None
            }
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }

    /// Handles the synthetic startup message.
    ///
    /// `Initialized` is a one-shot event emitted during startup. Subsequent
    /// `Initialized` messages are ignored so the initial fetches run once.
    fn handle_initialized(&mut self) -> Option<Cmd> {
        if self.has_initialized {
            return None;
        }

        self.has_initialized = true;
        Some(Self::initial_fetch_cmd())
    }
}
