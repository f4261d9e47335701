//! `Model` trait implementation for the storefront TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `StorefrontApp`, handling initialisation, update dispatch, and view
//! rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use super::{Panel, StorefrontApp};
use crate::tui::components::ansi;
use crate::tui::input::{InputContext, map_key_to_message_with_context};
use crate::tui::messages::AppMsg;

impl Model for StorefrontApp {
    fn init() -> (Self, Option<Cmd>) {
        let site_url = crate::tui::fetch_context().and_then(|context| context.site_url().cloned());
        let model = Self::loading().with_site_url(site_url);

        // Emit an immediate startup message to trigger the first render cycle.
        // The fetches are issued when `AppMsg::Initialized` is handled.
        let cmd = Self::immediate_init_cmd();

        (model, Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs with context-aware mapping
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let context = self.input_context();
            let app_msg = map_key_to_message_with_context(key_msg, context);
            if let Some(mapped) = app_msg {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        // If help is shown, render overlay instead
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let body_height = self.body_height();
        let mut body: Vec<&str> = Vec::new();
        let rendered_body = self.render_body();
        body.extend(rendered_body.lines().take(body_height));
        body.resize(body_height, "");

        let mut output = self.render_header();
        for line in body {
            output.push_str(line);
            output.push('\n');
        }
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl StorefrontApp {
    /// Returns the current input context for context-aware key mapping.
    pub(crate) const fn input_context(&self) -> InputContext {
        match self.panel {
            Panel::Reviews if self.review_state.zoom().is_some() => InputContext::Zoom,
            Panel::Reviews => InputContext::Reviews,
            Panel::Footer => InputContext::Footer,
        }
    }

    /// Columns available to panel content.
    ///
    /// One column less than the terminal width, to avoid autowrap.
    pub(crate) fn content_width(&self) -> usize {
        usize::from(self.width.max(1)).saturating_sub(1).max(1)
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// The output stream from components can leave stale trailing cells behind
    /// when rows are shorter than previous frames, especially after resize.
    /// Rows are clamped to one column less than terminal width to avoid
    /// autowrap, and padded with spaces to clear stale trailing cells.
    fn normalise_viewport(&self, output: &str) -> String {
        let safe_width = self.content_width();
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| ansi::fit_to_width(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}
