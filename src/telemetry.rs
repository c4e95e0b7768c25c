//! Application telemetry events and sinks.
//!
//! Appraise sends nothing anywhere; telemetry is a local debugging aid that
//! records the outcome of each analysis request as structured events.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Appraise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// An analysis request returned a payload.
    AnalysisCompleted {
        /// Submitted product query.
        product: String,
        /// Wall-clock time of the request in milliseconds.
        latency_ms: u64,
        /// Number of offers in the payload.
        price_count: usize,
        /// Number of reviews in the payload.
        review_count: usize,
    },
    /// An analysis request failed.
    AnalysisFailed {
        /// Submitted product query.
        product: String,
        /// User-facing error message.
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

/// Test helpers for asserting on recorded telemetry.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns the recorded events, leaving the sink empty.
        ///
        /// # Panics
        ///
        /// Panics if the events mutex is poisoned.
        #[must_use]
        pub fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .expect("events mutex should be available")
                .drain(..)
                .collect()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .expect("events mutex should be available")
                .push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingTelemetrySink;
    use super::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingTelemetrySink::default();
        sink.record(TelemetryEvent::AnalysisFailed {
            product: "iPhone 15".to_owned(),
            message: "boom".to_owned(),
        });

        assert_eq!(
            sink.take(),
            vec![TelemetryEvent::AnalysisFailed {
                product: "iPhone 15".to_owned(),
                message: "boom".to_owned(),
            }]
        );
        assert!(sink.take().is_empty(), "take should drain the sink");
    }

    #[test]
    fn noop_sink_accepts_events() {
        NoopTelemetrySink.record(TelemetryEvent::AnalysisFailed {
            product: "iPhone 15".to_owned(),
            message: "boom".to_owned(),
        });
    }

    #[test]
    fn events_serialise_with_snake_case_tag() {
        let event = TelemetryEvent::AnalysisCompleted {
            product: "Pixel 8".to_owned(),
            latency_ms: 42,
            price_count: 2,
            review_count: 5,
        };

        let value = serde_json::to_value(&event).expect("event should serialise");

        assert_eq!(
            value,
            serde_json::json!({
                "type": "analysis_completed",
                "product": "Pixel 8",
                "latency_ms": 42,
                "price_count": 2,
                "review_count": 5
            })
        );
    }
}
