//! Application configuration loaded from CLI, environment, and files.
//!
//! Values merge through ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.storefront.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `STOREFRONT_API_BASE_URL`,
//!    `STOREFRONT_VARIANT_ID`, and friends
//! 4. **Command-line arguments** – `--api-base-url`/`-a`, `--variant-id`/`-v`,
//!    and friends
//!
//! # Configuration File
//!
//! ```toml
//! api_base_url = "https://shop.example/api"
//! variant_id = "66b1c0f2e4"
//! site_url = "https://shop.example"
//! settings_stale_seconds = 300
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::api::error::StorefrontError;
use crate::api::scope::{ApiBaseUrl, DEFAULT_SETTINGS_NAMESPACE, ReviewScope, SettingsNamespace};

/// How the binary presents the storefront panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Full-screen interactive terminal UI.
    Interactive,
    /// Render both panels once to stdout and exit.
    Snapshot,
}

/// Default settings cache stale time, in seconds.
pub const DEFAULT_SETTINGS_STALE_SECONDS: u64 = 300;

/// Default render width for snapshot mode, in columns.
pub const DEFAULT_SNAPSHOT_WIDTH: u16 = 100;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `STOREFRONT_API_BASE_URL` or `--api-base-url`: Backend API root
/// - `STOREFRONT_VARIANT_ID` or `--variant-id`: Product variant to review
/// - `STOREFRONT_ORDER_ID` or `--order-id`: Optional order scope
/// - `STOREFRONT_SITE_URL` or `--site-url`: Root used for footer links
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use storefront::StorefrontConfig;
///
/// let config = StorefrontConfig::load().expect("failed to load configuration");
/// let api = config.require_api_base_url().expect("API base URL required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "STOREFRONT",
    discovery(
        dotfile_name = ".storefront.toml",
        config_file_name = "storefront.toml",
        app_name = "storefront"
    )
)]
pub struct StorefrontConfig {
    /// Root URL of the storefront backend API.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base-url <URL>` or `-a <URL>`
    /// - Environment: `STOREFRONT_API_BASE_URL`
    /// - Config file: `api_base_url = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_base_url: Option<String>,

    /// Product variant whose reviews are listed.
    ///
    /// Without a variant the review panel shows its empty state and no
    /// request is made.
    ///
    /// Can be provided via:
    /// - CLI: `--variant-id <ID>` or `-v <ID>`
    /// - Environment: `STOREFRONT_VARIANT_ID`
    /// - Config file: `variant_id = "..."`
    #[ortho_config(cli_short = 'v')]
    pub variant_id: Option<String>,

    /// Order that narrows the review list to a single purchase.
    ///
    /// Can be provided via:
    /// - CLI: `--order-id <ID>` or `-o <ID>`
    /// - Environment: `STOREFRONT_ORDER_ID`
    /// - Config file: `order_id = "..."`
    #[ortho_config(cli_short = 'o')]
    pub order_id: Option<String>,

    /// Public storefront URL used to resolve footer routes into links.
    ///
    /// Can be provided via:
    /// - CLI: `--site-url <URL>` or `-u <URL>`
    /// - Environment: `STOREFRONT_SITE_URL`
    /// - Config file: `site_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub site_url: Option<String>,

    /// Settings namespace holding the footer configuration.
    #[ortho_config(cli_short = 'n')]
    pub settings_namespace: String,

    /// How long fetched site settings are reused, in seconds.
    #[ortho_config(cli_short = 'S')]
    pub settings_stale_seconds: u64,

    /// Renders both panels once to stdout instead of starting the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--snapshot` / `-s`
    /// - Config file: `snapshot = true`
    ///
    /// Note: `STOREFRONT_SNAPSHOT` is not read because `ortho_config` does not
    /// load boolean values from the environment.
    #[ortho_config(cli_short = 's')]
    pub snapshot: bool,

    /// Terminal width assumed by snapshot rendering.
    #[ortho_config()]
    pub snapshot_width: u16,

    /// Emits JSONL telemetry events to stderr.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            variant_id: None,
            order_id: None,
            site_url: None,
            settings_namespace: DEFAULT_SETTINGS_NAMESPACE.to_owned(),
            settings_stale_seconds: DEFAULT_SETTINGS_STALE_SECONDS,
            snapshot: false,
            snapshot_width: DEFAULT_SNAPSHOT_WIDTH,
            telemetry: false,
        }
    }
}

impl StorefrontConfig {
    /// Parses the configured API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::MissingApiBaseUrl`] when no URL is
    /// configured, or [`StorefrontError::InvalidUrl`] when it does not parse
    /// as an absolute `http` or `https` URL.
    pub fn require_api_base_url(&self) -> Result<ApiBaseUrl, StorefrontError> {
        let raw = self
            .api_base_url
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .ok_or(StorefrontError::MissingApiBaseUrl)?;
        ApiBaseUrl::parse(raw)
    }

    /// Builds the review scope from the variant and order identifiers.
    ///
    /// Returns `Ok(None)` when no variant is configured.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::InvalidVariantId`] or
    /// [`StorefrontError::InvalidOrderId`] when a supplied identifier is
    /// blank.
    pub fn review_scope(&self) -> Result<Option<ReviewScope>, StorefrontError> {
        ReviewScope::from_parts(self.variant_id.as_deref(), self.order_id.as_deref())
    }

    /// The settings namespace, falling back to `site-settings` when blank.
    #[must_use]
    pub fn settings_namespace(&self) -> SettingsNamespace {
        SettingsNamespace::new(&self.settings_namespace)
    }

    /// Stale time applied to the settings cache.
    #[must_use]
    pub const fn settings_stale_time(&self) -> Duration {
        Duration::from_secs(self.settings_stale_seconds)
    }

    /// Parses the optional public site URL.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::InvalidUrl`] when the value is set but is
    /// not an absolute `http` or `https` URL.
    pub fn site_url(&self) -> Result<Option<ApiBaseUrl>, StorefrontError> {
        self.site_url
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(ApiBaseUrl::parse)
            .transpose()
    }

    /// Determines how the binary should present the panels.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.snapshot {
            OperationMode::Snapshot
        } else {
            OperationMode::Interactive
        }
    }
}

#[cfg(test)]
mod tests;
