//! Transient user-facing notifications.

use std::io::Write;

/// Receives short success/error messages for transient display.
///
/// Fire-and-forget: implementations must not fail or block for long.
pub trait NotificationSink: Send + Sync {
    fn notify_success(&self, text: &str);
    fn notify_error(&self, text: &str);
}

/// Sink that records notifications as log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify_success(&self, text: &str) {
        tracing::info!(target: "bookshelf::notify", "{}", text);
    }

    fn notify_error(&self, text: &str) {
        tracing::warn!(target: "bookshelf::notify", "{}", text);
    }
}

/// Sink that prints notifications to stderr, one line each.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify_success(&self, text: &str) {
        let _ = writeln!(std::io::stderr(), "✓ {}", text);
    }

    fn notify_error(&self, text: &str) {
        let _ = writeln!(std::io::stderr(), "✗ {}", text);
    }
}
