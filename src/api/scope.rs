//! Identity wrappers and request scopes for storefront API calls.

use url::Url;

use super::error::StorefrontError;

/// Settings namespace used by the footer when none is configured.
pub const DEFAULT_SETTINGS_NAMESPACE: &str = "site-settings";

/// Validated root URL of the storefront backend API.
///
/// Endpoints are appended as path segments, so the wrapped URL always carries
/// a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(Url);

impl ApiBaseUrl {
    /// Parses and validates an absolute `http` or `https` URL.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::InvalidUrl`] when the value does not parse,
    /// uses another scheme, or cannot carry a path.
    pub fn parse(value: &str) -> Result<Self, StorefrontError> {
        let mut url = Url::parse(value.trim())
            .map_err(|error| StorefrontError::InvalidUrl(format!("{value}: {error}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(StorefrontError::InvalidUrl(format!(
                "{value}: scheme must be http or https"
            )));
        }
        if url.cannot_be_a_base() {
            return Err(StorefrontError::InvalidUrl(format!(
                "{value}: URL cannot carry a path"
            )));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self(url))
    }

    /// Borrow the underlying URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }

    /// Builds an endpoint URL from path segments and query pairs.
    ///
    /// Segments are percent-encoded individually, so identifiers containing
    /// `/` or `?` cannot escape their segment.
    #[must_use]
    pub fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Url {
        let mut url = self.0.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }
}

/// Product variant identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantId(String);

impl VariantId {
    /// Validates that the identifier is non-blank and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::InvalidVariantId`] when the value is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, StorefrontError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(StorefrontError::InvalidVariantId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Order identifier used to scope reviews to a purchase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    /// Validates that the identifier is non-blank and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::InvalidOrderId`] when the value is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, StorefrontError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(StorefrontError::InvalidOrderId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Which reviews a review list shows: one variant, optionally within an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReviewScope {
    variant: VariantId,
    order: Option<OrderId>,
}

impl ReviewScope {
    /// Scope covering every review of a variant.
    #[must_use]
    pub const fn for_variant(variant: VariantId) -> Self {
        Self {
            variant,
            order: None,
        }
    }

    /// Narrows the scope to reviews left on a single order.
    #[must_use]
    pub fn within_order(self, order: OrderId) -> Self {
        Self {
            order: Some(order),
            ..self
        }
    }

    /// Builds a scope from optional raw identifiers.
    ///
    /// Returns `Ok(None)` when no variant is given: without a variant there is
    /// nothing to fetch.
    ///
    /// # Errors
    ///
    /// Returns an error when a supplied identifier is blank.
    pub fn from_parts(
        variant: Option<&str>,
        order: Option<&str>,
    ) -> Result<Option<Self>, StorefrontError> {
        let Some(raw_variant) = variant else {
            return Ok(None);
        };
        let scope = Self::for_variant(VariantId::new(raw_variant)?);
        match order {
            Some(raw_order) => Ok(Some(scope.within_order(OrderId::new(raw_order)?))),
            None => Ok(Some(scope)),
        }
    }

    /// The variant whose reviews are shown.
    #[must_use]
    pub const fn variant(&self) -> &VariantId {
        &self.variant
    }

    /// The order scope, if any.
    #[must_use]
    pub const fn order(&self) -> Option<&OrderId> {
        self.order.as_ref()
    }

    /// Resolves the endpoint for this scope.
    ///
    /// Order-scoped requests list the whole order; callers retain the variant
    /// afterwards with [`ReviewScope::admits`].
    #[must_use]
    pub fn endpoint(&self, base: &ApiBaseUrl) -> Url {
        match &self.order {
            Some(order) => base.endpoint(&["reviews"], &[("orderId", order.as_str())]),
            None => base.endpoint(&["reviews", self.variant.as_str()], &[]),
        }
    }

    /// Returns true when a review for `variant_id` belongs in this scope.
    #[must_use]
    pub fn admits(&self, variant_id: Option<&str>) -> bool {
        self.order.is_none() || variant_id == Some(self.variant.as_str())
    }
}

/// Settings namespace key, such as `site-settings`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SettingsNamespace(String);

impl SettingsNamespace {
    /// Wraps a namespace, falling back to the default when blank.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Self {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            Self::default()
        } else {
            Self(trimmed.to_owned())
        }
    }

    /// Borrow the namespace.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for SettingsNamespace {
    fn default() -> Self {
        Self(DEFAULT_SETTINGS_NAMESPACE.to_owned())
    }
}
