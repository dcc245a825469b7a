//! Toast notification state.

use std::time::{Duration, Instant};

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Info,
    Error,
}

/// A transient message shown over the page.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub toast_type: ToastType,
    pub expires_at: Instant,
}

impl Toast {
    #[must_use]
    pub fn new(message: impl Into<String>, toast_type: ToastType, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            toast_type,
            expires_at: Instant::now() + ttl,
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiry() {
        let toast = Toast::new("hi", ToastType::Info, Duration::from_secs(3));
        assert!(!toast.is_expired(Instant::now()));
        assert!(toast.is_expired(toast.expires_at));
        assert!(toast.is_expired(toast.expires_at + Duration::from_millis(1)));
    }
}
