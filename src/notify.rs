//! User notification sink.
//!
//! The host application renders toasts; the engine only reports what
//! happened. Every rejected operation produces a short, actionable error
//! message and every successful structural operation a confirmation.

/// Sink for user-facing success/error messages.
pub trait Notifier {
    /// A structural operation succeeded (split, close, duplicate, delete).
    fn success(&mut self, message: &str);
    /// An operation was rejected; `message` says what was wrong.
    fn error(&mut self, message: &str);
}

/// Default notifier that routes messages to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&mut self, message: &str) {
        log::info!("✅ {message}");
    }

    fn error(&mut self, message: &str) {
        log::warn!("⚠️ {message}");
    }
}
