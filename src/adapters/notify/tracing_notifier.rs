//! Notifier that renders notices into the tracing stream.
//!
//! Used where no UI is attached (headless runs, examples, development).

use crate::ports::{Notice, Notifier};

/// Logs notices at info/warn level.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match &notice {
            Notice::Success(message) => tracing::info!(target: "notice", "{}", message),
            Notice::Error(message) => tracing::warn!(target: "notice", "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_accepts_both_kinds() {
        let notifier = TracingNotifier;
        notifier.notify(Notice::success("Lectures loaded"));
        notifier.notify(Notice::error("Error loading lectures"));
    }
}
