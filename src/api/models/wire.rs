//! JSON shapes returned by the storefront backend.
//!
//! The backend is loosely typed: references may or may not be populated,
//! images may be objects or strings, and lists may arrive bare or wrapped in
//! a `data` field. Decoding never fails on shape; anything unrecognised
//! degrades to an empty list or an absent field.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::sanitize;
use super::{
    AppLinks, FooterSettings, Review, ReviewAuthor, ReviewImage, SiteSettings, SocialLinks,
    SocialPlatform,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiReview {
    #[serde(rename = "_id", default)]
    pub(crate) id: Option<String>,
    #[serde(default)]
    pub(crate) user_id: Option<ApiUserRef>,
    #[serde(default)]
    pub(crate) rating: Option<ApiRating>,
    #[serde(default)]
    pub(crate) comment: Option<String>,
    #[serde(default)]
    pub(crate) images: Option<Vec<ApiAsset>>,
    #[serde(default)]
    pub(crate) created_at: Option<String>,
    #[serde(default)]
    pub(crate) product_variant_id: Option<ApiReference>,
}

/// A user reference: populated document or bare identifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum ApiUserRef {
    Reference(String),
    Populated {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        avatar: Option<String>,
    },
}

/// A document reference: bare identifier or populated document.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum ApiReference {
    Id(String),
    Populated {
        #[serde(rename = "_id", default)]
        id: Option<String>,
    },
}

/// An uploaded asset: `{ "url": ... }` or a plain URL string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum ApiAsset {
    Url(String),
    Object {
        #[serde(default)]
        url: Option<String>,
    },
}

/// Ratings are integers; anything else is kept but never matches a filter.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum ApiRating {
    Integer(u64),
    Other(serde::de::IgnoredAny),
}

impl ApiAsset {
    fn into_url(self) -> Option<String> {
        let url = match self {
            Self::Url(url) => Some(url),
            Self::Object { url } => url,
        };
        url.filter(|value| sanitize::is_safe_url(value))
    }
}

impl ApiReference {
    fn into_id(self) -> Option<String> {
        match self {
            Self::Id(id) => Some(id),
            Self::Populated { id } => id,
        }
    }
}

impl ApiRating {
    fn stars(&self) -> u8 {
        match self {
            Self::Integer(value) => u8::try_from(*value).unwrap_or(0),
            Self::Other(_) => 0,
        }
    }
}

impl ApiReview {
    fn author_name(&self) -> Option<&str> {
        match &self.user_id {
            Some(ApiUserRef::Populated { name, .. }) => name.as_deref(),
            Some(ApiUserRef::Reference(_)) | None => None,
        }
    }

    /// Identifier for a review the backend sent without `_id`.
    ///
    /// Derived from the review's content so that the same review keeps its
    /// identifier across reloads. Identical reviews are told apart by their
    /// occurrence count, tracked in `occurrences`.
    fn fallback_id(&self, occurrences: &mut HashMap<u64, usize>) -> String {
        let mut hasher = DefaultHasher::new();
        self.author_name().hash(&mut hasher);
        self.rating.as_ref().map(ApiRating::stars).hash(&mut hasher);
        self.comment.hash(&mut hasher);
        self.created_at.hash(&mut hasher);
        let digest = hasher.finish();

        let occurrence = occurrences.entry(digest).or_default();
        let id = format!("review-{digest:016x}-{occurrence}");
        *occurrence += 1;
        id
    }

    /// Converts into a domain review, using `fallback_id` when `_id` is
    /// missing so that per-review UI state stays addressable.
    ///
    /// Text fields lose their control characters and URLs carrying control
    /// characters are dropped.
    pub(crate) fn into_review(self, fallback_id: String) -> Review {
        let author = match self.user_id {
            Some(ApiUserRef::Populated { name, avatar }) => ReviewAuthor {
                name: name.map(|value| sanitize::single_line(&value)),
                avatar_url: avatar.filter(|url| sanitize::is_safe_url(url)),
            },
            Some(ApiUserRef::Reference(_)) | None => ReviewAuthor::default(),
        };

        Review {
            id: self.id.unwrap_or(fallback_id),
            author,
            rating: self.rating.as_ref().map_or(0, ApiRating::stars),
            comment: self
                .comment
                .map(|comment| sanitize::multiline(&comment))
                .unwrap_or_default(),
            images: self
                .images
                .unwrap_or_default()
                .into_iter()
                .map(|asset| ReviewImage {
                    url: asset.into_url(),
                })
                .collect(),
            created_at: self.created_at.as_deref().and_then(parse_timestamp),
            variant_id: self.product_variant_id.and_then(ApiReference::into_id),
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|timestamp| timestamp.with_timezone(&Utc))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ApiSiteSettings {
    pub(crate) logo: Option<ApiAsset>,
    pub(crate) footer: Option<ApiFooterSettings>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ApiFooterSettings {
    pub(crate) phone: Option<String>,
    pub(crate) social_links: Option<serde_json::Map<String, Value>>,
    pub(crate) app_links: Option<ApiAppLinks>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ApiAppLinks {
    pub(crate) ios: Option<String>,
    pub(crate) android: Option<String>,
}

impl From<ApiSiteSettings> for SiteSettings {
    fn from(value: ApiSiteSettings) -> Self {
        let footer = value.footer.unwrap_or_default();
        let mut social_links = SocialLinks::default();
        for (key, link) in footer.social_links.unwrap_or_default() {
            if let (Some(platform), Value::String(url)) = (SocialPlatform::from_key(&key), link)
                && sanitize::is_safe_url(&url)
            {
                social_links.set(platform, url);
            }
        }
        let app_links = footer.app_links.unwrap_or_default();

        Self {
            logo_url: value.logo.and_then(ApiAsset::into_url),
            footer: FooterSettings {
                phone: footer.phone.map(|phone| sanitize::single_line(&phone)),
                social_links,
                app_links: AppLinks {
                    ios: app_links.ios.filter(|url| usable_link(url)),
                    android: app_links.android.filter(|url| usable_link(url)),
                },
            },
        }
    }
}

fn usable_link(url: &str) -> bool {
    !url.trim().is_empty() && sanitize::is_safe_url(url)
}

/// Extracts the list carried by a response: a bare array or `{ "data": [...] }`.
fn list_items(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Decodes a review list body.
///
/// Unexpected shapes yield an empty list and malformed elements are skipped.
pub(crate) fn decode_reviews(body: &str) -> Vec<Review> {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        tracing::debug!("review response is not JSON; treating as empty");
        return Vec::new();
    };

    let mut occurrences = HashMap::new();
    list_items(value)
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<ApiReview>(item) {
            Ok(api) => {
                let fallback_id = if api.id.is_some() {
                    String::new()
                } else {
                    api.fallback_id(&mut occurrences)
                };
                Some(api.into_review(fallback_id))
            }
            Err(error) => {
                tracing::debug!("skipping malformed review at index {index}: {error}");
                None
            }
        })
        .collect()
}

/// Decodes a settings body: the first element of a list, or a bare object.
///
/// Anything unusable decodes to default settings so the footer falls back to
/// its built-in values.
pub(crate) fn decode_site_settings(body: &str) -> SiteSettings {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        tracing::debug!("settings response is not JSON; using defaults");
        return SiteSettings::default();
    };

    let first = match value {
        Value::Object(object) if !object.contains_key("data") => Some(Value::Object(object)),
        other => list_items(other).into_iter().next(),
    };

    first
        .and_then(|item| match serde_json::from_value::<ApiSiteSettings>(item) {
            Ok(api) => Some(SiteSettings::from(api)),
            Err(error) => {
                tracing::debug!("settings document is malformed; using defaults: {error}");
                None
            }
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::api::models::DEFAULT_PHONE;

    fn full_review_json() -> Value {
        json!({
            "_id": "r1",
            "userId": { "_id": "u1", "name": "Lan", "avatar": "https://cdn.example/lan.png" },
            "rating": 4,
            "comment": "Soft fabric",
            "images": [{ "url": "https://cdn.example/1.jpg" }, "https://cdn.example/2.jpg"],
            "createdAt": "2025-03-12T08:30:00.000Z",
            "productVariantId": "v1"
        })
    }

    #[test]
    fn decodes_populated_review() {
        let reviews = decode_reviews(&json!([full_review_json()]).to_string());
        let review = reviews.first().expect("one review decoded");

        assert_eq!(review.id, "r1");
        assert_eq!(review.author.name.as_deref(), Some("Lan"));
        assert_eq!(
            review.author.avatar_url.as_deref(),
            Some("https://cdn.example/lan.png")
        );
        assert_eq!(review.rating, 4);
        assert_eq!(review.comment, "Soft fabric");
        assert_eq!(
            review.images,
            vec![
                ReviewImage::new("https://cdn.example/1.jpg"),
                ReviewImage::new("https://cdn.example/2.jpg"),
            ]
        );
        assert_eq!(
            review.created_at.map(|at| at.format("%d/%m/%Y").to_string()),
            Some("12/03/2025".to_owned())
        );
        assert_eq!(review.variant_id.as_deref(), Some("v1"));
    }

    #[test]
    fn decodes_wrapped_list() {
        let body = json!({ "data": [full_review_json()] }).to_string();
        assert_eq!(decode_reviews(&body).len(), 1);
    }

    #[rstest]
    #[case::object_without_data(json!({ "message": "ok" }).to_string())]
    #[case::data_not_a_list(json!({ "data": { "_id": "r1" } }).to_string())]
    #[case::scalar(json!(42).to_string())]
    #[case::null("null".to_owned())]
    #[case::not_json("<html>oops</html>".to_owned())]
    fn unexpected_shapes_decode_to_empty(#[case] body: String) {
        assert!(decode_reviews(&body).is_empty());
    }

    #[test]
    fn sparse_review_uses_fallbacks() {
        let body = json!([{ "userId": "u9", "productVariantId": { "_id": "v2" } }]).to_string();
        let reviews = decode_reviews(&body);
        let review = reviews.first().expect("one review decoded");

        assert!(review.id.starts_with("review-"));
        assert_eq!(review.author, ReviewAuthor::default());
        assert_eq!(review.rating, 0);
        assert!(review.comment.is_empty());
        assert!(review.images.is_empty());
        assert!(review.created_at.is_none());
        assert_eq!(review.variant_id.as_deref(), Some("v2"));
    }

    #[test]
    fn fallback_ids_follow_content_across_reloads() {
        let first = json!({ "comment": "Runs small", "rating": 3 });
        let second = json!({ "comment": "Lovely colour", "rating": 5 });

        let initial = decode_reviews(&json!([first.clone(), second.clone()]).to_string());
        let reloaded = decode_reviews(&json!([second, first]).to_string());

        let id_of = |reviews: &[Review], comment: &str| {
            reviews
                .iter()
                .find(|review| review.comment == comment)
                .map(|review| review.id.clone())
                .expect("review present")
        };
        assert_eq!(id_of(&initial, "Runs small"), id_of(&reloaded, "Runs small"));
        assert_eq!(
            id_of(&initial, "Lovely colour"),
            id_of(&reloaded, "Lovely colour")
        );
        assert_ne!(id_of(&initial, "Runs small"), id_of(&initial, "Lovely colour"));
    }

    #[test]
    fn identical_reviews_without_ids_stay_distinct() {
        let twin = json!({ "comment": "Great", "rating": 5 });
        let reviews = decode_reviews(&json!([twin.clone(), twin]).to_string());

        let ids: Vec<&str> = reviews.iter().map(|review| review.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids.first(), ids.get(1));
    }

    #[test]
    fn review_text_loses_control_characters() {
        let body = json!([{
            "_id": "r1",
            "userId": { "name": "Lan\x1b[2J", "avatar": "https://cdn.example/a.png\x07" },
            "comment": "hi\x1b]52;c;ZXZpbA==\x07 \x1b[2J\nsecond line",
            "images": ["https://cdn.example/1.jpg\x1b\\", "https://cdn.example/2.jpg"]
        }])
        .to_string();

        let reviews = decode_reviews(&body);
        let review = reviews.first().expect("one review decoded");

        assert_eq!(review.comment, "hi]52;c;ZXZpbA== [2J\nsecond line");
        assert!(!review.comment.contains('\u{1b}'));
        assert_eq!(review.author.avatar_url, None);
        assert_eq!(
            review.images,
            vec![
                ReviewImage::default(),
                ReviewImage::new("https://cdn.example/2.jpg"),
            ]
        );
    }

    #[test]
    fn settings_drop_links_with_control_characters() {
        let body = json!({
            "logo": "https://cdn.example/logo.png\x1b]8;;",
            "footer": {
                "phone": "1900\x1b[2J 6868",
                "socialLinks": { "facebook": "https://facebook.example/\x1b\\x" },
                "appLinks": { "ios": "https://apps.example/\x07" }
            }
        })
        .to_string();

        let settings = decode_site_settings(&body);

        assert_eq!(settings.logo_url, None);
        assert_eq!(settings.phone_or_default(), "1900[2J 6868");
        assert!(settings.footer.social_links.is_empty());
        assert_eq!(settings.footer.app_links.ios, None);
    }

    #[test]
    fn malformed_elements_are_skipped() {
        let body = json!([full_review_json(), "not a review", { "comment": 12 }]).to_string();
        let reviews = decode_reviews(&body);
        assert_eq!(reviews.len(), 1);
    }

    #[test]
    fn non_integer_rating_matches_no_star() {
        let body = json!([{ "_id": "r1", "rating": 4.5 }, { "_id": "r2", "rating": 900 }])
            .to_string();
        let ratings: Vec<u8> = decode_reviews(&body).iter().map(|r| r.rating).collect();
        assert_eq!(ratings, vec![0, 0]);
    }

    #[test]
    fn image_objects_without_url_still_count() {
        let body = json!([{ "_id": "r1", "images": [{}] }]).to_string();
        let reviews = decode_reviews(&body);
        let review = reviews.first().expect("one review decoded");
        assert!(review.has_images());
        assert_eq!(review.images, vec![ReviewImage::default()]);
    }

    #[test]
    fn settings_use_first_list_element() {
        let body = json!([
            {
                "logo": { "url": "https://cdn.example/logo.png" },
                "footer": {
                    "phone": "1900 6868",
                    "socialLinks": {
                        "facebook": "https://facebook.example/shop",
                        "youtube": "",
                        "tiktok": "https://tiktok.example/shop",
                        "pinterest": null
                    },
                    "appLinks": { "ios": "https://apps.example/ios", "android": " " }
                }
            },
            { "footer": { "phone": "ignored" } }
        ])
        .to_string();

        let settings = decode_site_settings(&body);

        assert_eq!(settings.logo_url.as_deref(), Some("https://cdn.example/logo.png"));
        assert_eq!(settings.phone_or_default(), "1900 6868");
        let links = &settings.footer.social_links;
        assert_eq!(
            links.get(SocialPlatform::Facebook),
            Some("https://facebook.example/shop")
        );
        assert_eq!(links.get(SocialPlatform::Youtube), None);
        assert_eq!(links.get(SocialPlatform::Pinterest), None);
        assert_eq!(
            settings.footer.app_links.ios.as_deref(),
            Some("https://apps.example/ios")
        );
        assert_eq!(settings.footer.app_links.android, None);
    }

    #[rstest]
    #[case::bare_object(json!({ "footer": { "phone": "1900 1111" } }).to_string(), "1900 1111")]
    #[case::wrapped(json!({ "data": [{ "footer": { "phone": "1900 2222" } }] }).to_string(), "1900 2222")]
    #[case::empty_list(json!([]).to_string(), DEFAULT_PHONE)]
    #[case::malformed_footer(json!([{ "footer": "oops" }]).to_string(), DEFAULT_PHONE)]
    #[case::not_json("busy".to_owned(), DEFAULT_PHONE)]
    fn settings_shapes_resolve_phone(#[case] body: String, #[case] expected_phone: &str) {
        assert_eq!(decode_site_settings(&body).phone_or_default(), expected_phone);
    }
}
