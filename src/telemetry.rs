//! Application telemetry events and sinks.
//!
//! Storefront runs against a remote backend, so lightweight telemetry helps
//! when debugging slow or failing fetches. Events never leave the machine.

use std::io;

use serde::{Deserialize, Serialize};

/// Backend resource a fetch was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchResource {
    /// The review list.
    Reviews,
    /// The site settings singleton.
    SiteSettings,
}

/// A structured telemetry event emitted by Storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Reviews were fetched successfully.
    ReviewsLoaded {
        /// Number of reviews in scope after order filtering.
        review_count: usize,
        /// Wall-clock fetch duration in milliseconds.
        latency_ms: u64,
    },
    /// Site settings were fetched or served from cache.
    SiteSettingsLoaded {
        /// Wall-clock fetch duration in milliseconds.
        latency_ms: u64,
    },
    /// A backend fetch failed.
    FetchFailed {
        /// Resource being fetched.
        resource: FetchResource,
        /// Rendered error message.
        message: String,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Sinks for asserting on telemetry in tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::{Mutex, PoisonError};

    use super::{TelemetryEvent, TelemetrySink};

    /// Keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Drains the recorded events.
        #[must_use]
        pub fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .drain(..)
                .collect()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event);
        }
    }
}
