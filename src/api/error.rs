//! Error types exposed by the storefront API layer.

use thiserror::Error;

/// Errors surfaced while configuring the client or talking to the backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorefrontError {
    /// No API base URL was configured.
    #[error("API base URL is required (use --api-base-url or STOREFRONT_API_BASE_URL)")]
    MissingApiBaseUrl,

    /// A configured URL could not be parsed or uses an unsupported scheme.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// A product variant identifier was blank.
    #[error("product variant identifier must not be blank")]
    InvalidVariantId,

    /// An order identifier was blank.
    #[error("order identifier must not be blank")]
    InvalidOrderId,

    /// Networking failed while calling the backend.
    #[error("network error talking to the storefront API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The backend answered with a non-success status.
    #[error("storefront API returned {status}: {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Message extracted from the response body, if any.
        message: String,
    },

    /// The response body could not be read or decoded.
    #[error("storefront API response could not be decoded: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The terminal UI failed to start or crashed.
    #[error("terminal UI error: {message}")]
    Terminal {
        /// Details reported by the UI runtime.
        message: String,
    },
}
