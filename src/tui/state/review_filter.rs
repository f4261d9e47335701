//! Rating and image filter for the review list.
//!
//! Filtering runs client-side over reviews that have already been fetched;
//! no filter parameters are ever sent to the backend.

use crate::api::models::{MAX_RATING, Review};

/// Which reviews the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingFilter {
    /// Every review.
    #[default]
    All,
    /// Reviews carrying at least one image.
    HasImage,
    /// Reviews with exactly this many stars (1 to 5).
    Stars(u8),
}

impl RatingFilter {
    /// Builds a star filter, returning `None` outside `1..=5`.
    #[must_use]
    pub const fn stars(count: u8) -> Option<Self> {
        if count >= 1 && count <= MAX_RATING {
            Some(Self::Stars(count))
        } else {
            None
        }
    }

    /// Returns true if `review` passes this filter.
    #[must_use]
    pub fn matches(self, review: &Review) -> bool {
        match self {
            Self::All => true,
            Self::HasImage => review.has_images(),
            Self::Stars(count) => review.rating == count,
        }
    }

    /// Indices into `reviews` of the entries passing this filter, in order.
    #[must_use]
    pub fn apply(self, reviews: &[Review]) -> Vec<usize> {
        reviews
            .iter()
            .enumerate()
            .filter(|(_, review)| self.matches(review))
            .map(|(index, _)| index)
            .collect()
    }

    /// The next filter in selector order: all, images, then 5 down to 1 stars.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::All => Self::HasImage,
            Self::HasImage => Self::Stars(MAX_RATING),
            Self::Stars(count) if count > 1 && count <= MAX_RATING => Self::Stars(count - 1),
            Self::Stars(_) => Self::All,
        }
    }

    /// Human-readable label for the filter bar.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::All => "All".to_owned(),
            Self::HasImage => "With images".to_owned(),
            Self::Stars(1) => "1 star".to_owned(),
            Self::Stars(count) => format!("{count} stars"),
        }
    }
}
