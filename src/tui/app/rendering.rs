//! Rendering logic for the storefront TUI application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::{CHROME_HEIGHT, Panel, StorefrontApp};
use crate::tui::components::{
    FooterComponent, FooterViewContext, ReviewListComponent, ReviewListViewContext,
    ZoomViewContext, ansi, zoom_view,
};

const APP_TITLE: &str = "Storefront";

impl StorefrontApp {
    /// Renders the header bar with panel tabs.
    pub(super) fn render_header(&self) -> String {
        let tabs: Vec<String> = [Panel::Reviews, Panel::Footer]
            .into_iter()
            .map(|panel| {
                if panel == self.panel {
                    ansi::reverse(&format!(" {} ", panel.label()))
                } else {
                    format!(" {} ", panel.label())
                }
            })
            .collect();
        let loading = self.review_status.is_loading() || self.settings_status.is_loading();
        let loading_indicator = if loading { " [Loading...]" } else { "" };
        format!(
            "{}  {}{loading_indicator}\n",
            ansi::bold(APP_TITLE),
            tabs.join(" ")
        )
    }

    /// Renders the focused panel, or the zoom overlay when it is open.
    pub(super) fn render_body(&self) -> String {
        match self.panel {
            Panel::Reviews => self
                .render_zoom_overlay()
                .unwrap_or_else(|| self.render_review_panel(Some(self.body_height()))),
            Panel::Footer => self.render_footer_panel(),
        }
    }

    fn render_zoom_overlay(&self) -> Option<String> {
        let zoom = self.review_state.zoom()?;
        let review = self
            .reviews
            .iter()
            .find(|review| review.id == zoom.review_id())?;
        Some(zoom_view(&ZoomViewContext { review, zoom }))
    }

    /// Rows between the header bar and the status bar.
    pub(super) fn body_height(&self) -> usize {
        usize::from(self.height).saturating_sub(CHROME_HEIGHT)
    }

    pub(super) fn render_review_panel(&self, visible_height: Option<usize>) -> String {
        ReviewListComponent::view(&ReviewListViewContext {
            reviews: &self.reviews,
            filtered_indices: &self.filtered_indices,
            state: &self.review_state,
            status: &self.review_status,
            max_width: self.content_width(),
            visible_height,
        })
    }

    pub(super) fn render_footer_panel(&self) -> String {
        FooterComponent::view(&FooterViewContext {
            settings: &self.settings,
            toggles: &self.toggles,
            width: self.width,
            site_url: self.site_url.as_ref(),
        })
    }

    /// Renders the status bar with help hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = self.review_status.error() {
            return format!("Error: {error}\n");
        }

        let hints = match self.panel {
            Panel::Reviews if self.review_state.zoom().is_some() => "h/l:image  Esc:close  ?:help",
            Panel::Reviews => self.review_status_hints(),
            Panel::Footer => "a/s/c:sections  Tab:reviews  r:refresh  ?:help  q:quit",
        };
        format!("{hints}\n")
    }

    const fn review_status_hints(&self) -> &'static str {
        if self.width <= 80 {
            "q:quit  ?:help  j/k:move  h/l:page  f:filter"
        } else {
            "j/k:move  h/l:page  f:filter  Enter:more  z:zoom  Tab:footer  r:refresh  ?:help  q:quit"
        }
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Reviews:
  j, Down      Select next card
  k, Up        Select previous card
  h, p, Left   Previous page
  l, n, Right  Next page
  g, Home      First page
  G, End       Last page
  Enter, Space Show more/less of the comment
  z            Zoom the card's images

Filtering:
  f            Cycle filter
  0            All reviews
  i            Reviews with images
  1-5          Reviews with that many stars

Image zoom:
  h, Left      Previous image
  l, Right     Next image
  Esc, z       Close

Footer:
  a            Toggle About
  s            Toggle Customer service
  c            Toggle Contact

Other:
  Tab          Switch between reviews and footer
  r            Refresh reviews
  ?            Toggle this help
  q            Quit

Press any key to close this help.
";
        help_text.to_owned()
    }

    /// Renders both panels once, for non-interactive output.
    ///
    /// Lines are not padded; hyperlinks and styling are kept.
    #[must_use]
    pub fn snapshot(&self) -> String {
        let mut output = self.render_review_panel(None);
        output.push('\n');
        output.push_str(&self.render_footer_panel());
        output
    }
}
