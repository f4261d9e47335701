//! Site footer panel.
//!
//! Renders the brand block (logo, badges, social icons, hotline), the three
//! collapsible link sections, the newsletter box, app download links, and
//! the copyright line. Settings fields that are missing fall back to the
//! bundled defaults, so the footer renders the same way before settings
//! arrive and after a failed fetch.

use url::Url;

use super::ansi;
use crate::api::models::{SiteSettings, SocialPlatform, sanitize};
use crate::tui::state::{FooterSection, SectionToggles, is_wide};

/// Brand name shown next to the logo.
pub const BRAND_NAME: &str = "ELAVIA";

/// Copyright line closing the footer.
pub const COPYRIGHT: &str = "© Elavia. All rights reserved.";

/// Where a footer link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// A storefront route, resolved against the site URL.
    Route(&'static str),
    /// A link with no destination yet; rendered as plain text.
    Placeholder,
}

impl LinkTarget {
    /// Absolute URL for this target, when one can be formed.
    #[must_use]
    pub fn resolve(self, site_url: Option<&Url>) -> Option<String> {
        match self {
            Self::Route(route) => site_url
                .and_then(|base| base.join(route).ok())
                .map(String::from),
            Self::Placeholder => None,
        }
    }
}

/// A labelled footer link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    /// Visible text.
    pub label: &'static str,
    /// Destination.
    pub target: LinkTarget,
}

const fn route(label: &'static str, path: &'static str) -> FooterLink {
    FooterLink {
        label,
        target: LinkTarget::Route(path),
    }
}

const fn placeholder(label: &'static str) -> FooterLink {
    FooterLink {
        label,
        target: LinkTarget::Placeholder,
    }
}

const ABOUT_LINKS: [FooterLink; 3] = [
    placeholder("About us"),
    placeholder("Careers"),
    placeholder("Store locations"),
];

const SERVICE_LINKS: [FooterLink; 8] = [
    route("Terms of use", "/terms-policy"),
    route("Buying guide", "/buying-guide"),
    route("Payment policy", "/payment-policy"),
    route("Return policy", "/return-policy"),
    route("Warranty policy", "?action=chinhsachbaohanh"),
    route("Shipping policy", "?action=chinhsachvanchuyen"),
    route("Membership card", "?action=chinhsachthethanhvien"),
    route("Q&A", "?action=qanda"),
];

const CONTACT_LINKS: [FooterLink; 5] = [
    placeholder("Hotline"),
    placeholder("Email"),
    placeholder("Live chat"),
    placeholder("Messenger"),
    placeholder("Contact"),
];

const BADGES: [&str; 2] = ["[DMCA protected]", "[Registered with Bo Cong Thuong]"];

/// Links listed under a footer section.
#[must_use]
pub const fn section_links(section: FooterSection) -> &'static [FooterLink] {
    match section {
        FooterSection::About => &ABOUT_LINKS,
        FooterSection::Services => &SERVICE_LINKS,
        FooterSection::Contact => &CONTACT_LINKS,
    }
}

/// Key that toggles a section.
#[must_use]
pub const fn section_key(section: FooterSection) -> char {
    match section {
        FooterSection::About => 'a',
        FooterSection::Services => 's',
        FooterSection::Contact => 'c',
    }
}

/// Context for rendering the footer.
#[derive(Debug, Clone)]
pub struct FooterViewContext<'a> {
    /// Site settings, or defaults when none have loaded.
    pub settings: &'a SiteSettings,
    /// Section open/closed flags.
    pub toggles: &'a SectionToggles,
    /// Terminal width in columns.
    pub width: u16,
    /// Storefront root used to resolve routes.
    pub site_url: Option<&'a Url>,
}

/// Stateless footer renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FooterComponent;

impl FooterComponent {
    /// Renders the footer as a string.
    #[must_use]
    pub fn view(ctx: &FooterViewContext<'_>) -> String {
        let mut lines = Self::brand_block(ctx);
        lines.push(String::new());

        let wide = is_wide(ctx.width);
        for section in FooterSection::ALL {
            lines.extend(Self::section_block(ctx, section, wide));
        }

        lines.push(String::new());
        lines.push(ansi::bold("Newsletter"));
        lines.push("  Enter your email address  [Subscribe]".to_owned());
        lines.push(Self::app_links_line(ctx.settings));
        lines.push(ansi::dim(&"─".repeat(usize::from(ctx.width.clamp(1, 60)))));
        lines.push(COPYRIGHT.to_owned());

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }

    fn brand_block(ctx: &FooterViewContext<'_>) -> Vec<String> {
        let logo = ctx.settings.logo_url_or_default();
        let brand = match resolve_asset(logo, ctx.site_url) {
            Some(url) => ansi::hyperlink(&url, &ansi::bold(BRAND_NAME)),
            None => ansi::bold(BRAND_NAME),
        };

        vec![
            format!("{brand}  {}", ansi::dim(&sanitize::single_line(logo))),
            ansi::dim(&BADGES.join(" ")),
            format!("Follow us: {}", social_icons(ctx.settings)),
            format!(
                "HOTLINE: {}",
                sanitize::single_line(ctx.settings.phone_or_default())
            ),
        ]
    }

    fn section_block(ctx: &FooterViewContext<'_>, section: FooterSection, wide: bool) -> Vec<String> {
        let visible = ctx.toggles.is_visible(section, wide);
        let indicator = if visible { "▾" } else { "▸" };
        let heading = format!(
            "{indicator} {} {}",
            ansi::bold(section.title()),
            ansi::dim(&format!("[{}]", section_key(section)))
        );

        let mut lines = vec![heading];
        if visible {
            lines.extend(
                section_links(section)
                    .iter()
                    .map(|link| format!("    {}", render_link(link, ctx.site_url))),
            );
        }
        lines
    }

    fn app_links_line(settings: &SiteSettings) -> String {
        let links = &settings.footer.app_links;
        let ios = store_badge("App Store", links.ios.as_deref());
        let android = store_badge("Google Play", links.android.as_deref());
        format!("Download the app: {ios}  {android}")
    }
}

/// Renders the five social icons in display order.
///
/// Configured platforms become hyperlinks; the rest are dimmed and unlinked.
#[must_use]
pub fn social_icons(settings: &SiteSettings) -> String {
    SocialPlatform::ALL
        .into_iter()
        .map(|platform| match settings.footer.social_links.get(platform) {
            Some(url) if sanitize::is_safe_url(url) => ansi::hyperlink(url, platform.icon()),
            _ => ansi::dim(platform.icon()),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a footer link, linked only when its target resolves.
#[must_use]
pub fn render_link(link: &FooterLink, site_url: Option<&Url>) -> String {
    link.target
        .resolve(site_url)
        .map_or_else(|| link.label.to_owned(), |url| ansi::hyperlink(&url, link.label))
}

fn store_badge(label: &str, url: Option<&str>) -> String {
    match url.filter(|value| !value.trim().is_empty() && sanitize::is_safe_url(value)) {
        Some(target) => ansi::hyperlink(target, label),
        None => ansi::dim(label),
    }
}

fn resolve_asset(path: &str, site_url: Option<&Url>) -> Option<String> {
    if let Ok(absolute) = Url::parse(path) {
        return Some(absolute.into());
    }
    site_url
        .and_then(|base| base.join(path).ok())
        .map(String::from)
}
