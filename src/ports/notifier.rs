//! Transient notification port.
//!
//! The lecture store surfaces operation outcomes as short-lived notices
//! (the UI renders them as toasts). Notices are fire-and-forget; nothing
//! observes whether they were shown.

/// A transient user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    /// Creates a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Notice::Success(message.into())
    }

    /// Creates an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Notice::Error(message.into())
    }

    /// Returns the notice text.
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(message) | Notice::Error(message) => message,
        }
    }
}

/// Port for emitting transient notices.
pub trait Notifier: Send + Sync {
    /// Emit a notice.
    fn notify(&self, notice: Notice);
}
