//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording discussion events
//! (start, each generated turn, provider failures, the summary, completion)
//! to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! conversation transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured conversation event for logging.
///
/// Each event has a type string, a UTC timestamp, and a JSON payload
/// containing event-specific fields.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "turn_generated", "provider_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    /// Create a new conversation event; the logger stamps the time.
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging conversation events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL line).
/// The `log` method is synchronous and non-fallible: a failed write must not
/// interrupt a running discussion, so implementations drop write errors.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    #[test]
    fn test_logger_is_object_safe() {
        let recording = RecordingLogger {
            events: Mutex::new(Vec::new()),
        };
        let logger: &dyn ConversationLogger = &recording;
        logger.log(ConversationEvent::new(
            "discussion_started",
            serde_json::json!({"topic": "日焼け止め"}),
        ));
        NoConversationLogger.log(ConversationEvent::new("ignored", serde_json::json!({})));
        assert_eq!(*recording.events.lock().unwrap(), vec!["discussion_started"]);
    }
}
