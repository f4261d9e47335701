//! Open/closed state of the footer's collapsible sections.

/// Terminal width from which every footer section is always shown.
pub const WIDE_VIEWPORT_COLUMNS: u16 = 100;

/// Collapsible footer sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterSection {
    /// Company links.
    About,
    /// Customer service policies.
    Services,
    /// Contact channels.
    Contact,
}

impl FooterSection {
    /// Every section in display order.
    pub const ALL: [Self; 3] = [Self::About, Self::Services, Self::Contact];

    /// Section heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Services => "Customer service",
            Self::Contact => "Contact",
        }
    }
}

/// Per-section toggle flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionToggles {
    about: bool,
    services: bool,
    contact: bool,
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            about: true,
            services: false,
            contact: false,
        }
    }
}

impl SectionToggles {
    /// Returns the toggle state of a section, ignoring viewport width.
    #[must_use]
    pub const fn is_open(&self, section: FooterSection) -> bool {
        match section {
            FooterSection::About => self.about,
            FooterSection::Services => self.services,
            FooterSection::Contact => self.contact,
        }
    }

    /// Flips one section, leaving the others untouched.
    pub const fn toggle(&mut self, section: FooterSection) {
        match section {
            FooterSection::About => self.about = !self.about,
            FooterSection::Services => self.services = !self.services,
            FooterSection::Contact => self.contact = !self.contact,
        }
    }

    /// Whether a section's links are rendered: always on wide viewports.
    #[must_use]
    pub const fn is_visible(&self, section: FooterSection, wide: bool) -> bool {
        wide || self.is_open(section)
    }
}

/// Returns true when `width` counts as a wide viewport.
#[must_use]
pub const fn is_wide(width: u16) -> bool {
    width >= WIDE_VIEWPORT_COLUMNS
}
