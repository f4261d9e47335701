//! Test helpers for constructing `Review` and `SiteSettings` fixtures.
//!
//! # Examples
//!
//! ```
//! use storefront::api::models::test_support::{review, review_with_images};
//!
//! let plain = review("r1", 5, "Great fit");
//! assert!(!plain.has_images());
//!
//! let pictured = review_with_images("r2", 4, "See photos", 2);
//! assert_eq!(pictured.images.len(), 2);
//! ```

use super::{Review, ReviewAuthor, ReviewImage, SiteSettings, SocialLinks, SocialPlatform};

/// Constructs a review with an author, rating, and comment.
#[must_use]
pub fn review(id: &str, rating: u8, comment: &str) -> Review {
    Review {
        id: id.to_owned(),
        author: ReviewAuthor {
            name: Some(format!("Reviewer {id}")),
            avatar_url: None,
        },
        rating,
        comment: comment.to_owned(),
        variant_id: Some("variant-1".to_owned()),
        ..Review::default()
    }
}

/// Constructs a review with `image_count` images on `cdn.example`.
#[must_use]
pub fn review_with_images(id: &str, rating: u8, comment: &str, image_count: usize) -> Review {
    Review {
        images: (1..=image_count)
            .map(|index| ReviewImage::new(format!("https://cdn.example/{id}/{index}.jpg")))
            .collect(),
        ..review(id, rating, comment)
    }
}

/// Builds `count` reviews with ids `r1..rN`, cycling ratings 5 down to 1.
///
/// Every third review carries one image.
#[must_use]
pub fn sample_reviews(count: usize) -> Vec<Review> {
    (1..=count)
        .map(|index| {
            let id = format!("r{index}");
            let rating = u8::try_from(5 - (index - 1).rem_euclid(5)).unwrap_or(5);
            let images = usize::from(index.rem_euclid(3) == 0);
            review_with_images(&id, rating, &format!("Comment {index}"), images)
        })
        .collect()
}

/// Site settings with the given social links configured.
#[must_use]
pub fn settings_with_social(links: &[(SocialPlatform, &str)]) -> SiteSettings {
    let mut social_links = SocialLinks::default();
    for (platform, url) in links {
        social_links.set(*platform, *url);
    }
    let mut settings = SiteSettings::default();
    settings.footer.social_links = social_links;
    settings
}
