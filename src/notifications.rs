//! Toast notifications - transient status messages.
//!
//! Toasts surface recoverable outcomes (enquiry sent, settings problem)
//! without a modal interruption. The manager is polled from the frame tick;
//! expired toasts are pruned there.

use crate::constants::TOAST_LIFETIME_MS;
use std::time::{Duration, Instant};

/// Severity of a toast, controls its accent color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single transient message.
#[derive(Clone, Debug)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    created: Instant,
    lifetime: Duration,
}

impl Toast {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created: Instant::now(),
            lifetime: Duration::from_millis(TOAST_LIFETIME_MS),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, message)
    }

    /// Override the lifetime (mostly for tests).
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= self.lifetime
    }
}

/// Queue of active toasts, newest last.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        tracing::debug!(level = ?toast.level, message = %toast.message, "Toast");
        self.toasts.push(toast);
    }

    /// Drop expired toasts. Returns true if anything changed, so the caller
    /// knows to repaint.
    pub fn prune(&mut self) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired());
        self.toasts.len() != before
    }

    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_active() {
        let mut manager = ToastManager::new();
        assert!(manager.is_empty());

        manager.push(Toast::info("hello"));
        manager.push(Toast::error("bad"));
        assert_eq!(manager.active().len(), 2);
        assert_eq!(manager.active()[0].level, ToastLevel::Info);
        assert_eq!(manager.active()[1].level, ToastLevel::Error);
    }

    #[test]
    fn test_prune_drops_expired() {
        let mut manager = ToastManager::new();
        manager.push(Toast::info("gone").with_lifetime(Duration::ZERO));
        manager.push(Toast::success("stays"));

        assert!(manager.prune());
        assert_eq!(manager.active().len(), 1);
        assert_eq!(manager.active()[0].message, "stays");

        // Nothing left to prune
        assert!(!manager.prune());
    }
}
