//! Fetch status of a remote resource.

/// Where a fetch stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// A request is in flight.
    #[default]
    Loading,
    /// The last request failed with this message.
    Failed(String),
    /// Data is available.
    Ready,
}

impl LoadStatus {
    /// Returns true while a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The failure message, if the last request failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Ready => None,
        }
    }
}
