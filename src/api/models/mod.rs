//! Data models for storefront reviews and site settings.
//!
//! Domain types here are what the UI consumes. The backend's JSON shapes
//! live in `wire`, which converts into these types while tolerating the
//! variations the backend is known to produce (populated versus bare
//! references, image objects versus plain URL strings, wrapped lists).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

pub mod sanitize;
pub(crate) mod wire;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Logo shown when site settings do not configure one.
pub const DEFAULT_LOGO_URL: &str = "/images/logo.png";

/// Hotline shown when site settings do not configure one.
pub const DEFAULT_PHONE: &str = "0353 608 533";

/// Highest star rating a review can carry.
pub const MAX_RATING: u8 = 5;

/// Author reference attached to a review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewAuthor {
    /// Display name, when the backend populated the user.
    pub name: Option<String>,
    /// Avatar URL, when the backend populated the user.
    pub avatar_url: Option<String>,
}

/// One image attached to a review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewImage {
    /// Image URL as stored by the backend. May be absent or unusable, in
    /// which case the UI shows a placeholder.
    pub url: Option<String>,
}

impl ReviewImage {
    /// Creates an image entry for the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

/// A product review as shown by the review list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Review {
    /// Review identifier (`_id`).
    pub id: String,
    /// Who wrote the review.
    pub author: ReviewAuthor,
    /// Star rating. Values outside `1..=5` never match a star filter.
    pub rating: u8,
    /// Comment text; empty when the reviewer left none.
    pub comment: String,
    /// Attached images in upload order.
    pub images: Vec<ReviewImage>,
    /// Creation timestamp, when present and well formed.
    pub created_at: Option<DateTime<Utc>>,
    /// Product variant the review belongs to.
    pub variant_id: Option<String>,
}

impl Review {
    /// Returns true when the review has at least one image.
    #[must_use]
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}

/// Social platforms the footer links to, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SocialPlatform {
    /// Facebook page.
    Facebook,
    /// Google business profile.
    Google,
    /// Instagram account.
    Instagram,
    /// Pinterest board.
    Pinterest,
    /// `YouTube` channel.
    Youtube,
}

impl SocialPlatform {
    /// Every platform in footer display order.
    pub const ALL: [Self; 5] = [
        Self::Facebook,
        Self::Google,
        Self::Instagram,
        Self::Pinterest,
        Self::Youtube,
    ];

    /// Key used in the settings `socialLinks` mapping.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Google => "google",
            Self::Instagram => "instagram",
            Self::Pinterest => "pinterest",
            Self::Youtube => "youtube",
        }
    }

    /// Short icon label rendered in the footer.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Facebook => "fb",
            Self::Google => "gg",
            Self::Instagram => "ig",
            Self::Pinterest => "pin",
            Self::Youtube => "yt",
        }
    }

    /// Resolves a settings key to a platform.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|platform| platform.key() == key)
    }
}

/// Configured social links; platforms without a link are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks(BTreeMap<SocialPlatform, String>);

impl SocialLinks {
    /// Returns the link for a platform, if configured.
    #[must_use]
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        self.0.get(&platform).map(String::as_str)
    }

    /// Sets a platform link. Blank links are treated as absent.
    pub fn set(&mut self, platform: SocialPlatform, url: impl Into<String>) {
        let value = url.into();
        if value.trim().is_empty() {
            self.0.remove(&platform);
        } else {
            self.0.insert(platform, value);
        }
    }

    /// Builder-style variant of [`SocialLinks::set`].
    #[must_use]
    pub fn with(mut self, platform: SocialPlatform, url: impl Into<String>) -> Self {
        self.set(platform, url);
        self
    }

    /// Returns true when no platform has a link.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Mobile app store links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppLinks {
    /// Apple App Store URL.
    pub ios: Option<String>,
    /// Google Play URL.
    pub android: Option<String>,
}

/// Footer-specific settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FooterSettings {
    /// Hotline phone number.
    pub phone: Option<String>,
    /// Social network links.
    pub social_links: SocialLinks,
    /// App store links.
    pub app_links: AppLinks,
}

/// Site-wide settings singleton from the `site-settings` namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteSettings {
    /// Logo URL.
    pub logo_url: Option<String>,
    /// Footer settings.
    pub footer: FooterSettings,
}

impl SiteSettings {
    /// Logo URL, falling back to the bundled logo.
    #[must_use]
    pub fn logo_url_or_default(&self) -> &str {
        non_blank(self.logo_url.as_deref()).unwrap_or(DEFAULT_LOGO_URL)
    }

    /// Hotline number, falling back to the default hotline.
    #[must_use]
    pub fn phone_or_default(&self) -> &str {
        non_blank(self.footer.phone.as_deref()).unwrap_or(DEFAULT_PHONE)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
