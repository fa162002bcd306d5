//! Transient toast notifications.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub level: ToastLevel,
    pub message: String,
    pub expires_at: Instant,
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone)]
pub struct ToastManager {
    pub toasts: Vec<Toast>,
    next_id: u64,
    lifetime: Duration,
    max_visible: usize,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            lifetime: Duration::from_secs(4),
            max_visible: 3,
        }
    }
}

impl ToastManager {
    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>, now: Instant) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        let message = message.into();
        tracing::debug!(?level, %message, "toast");
        self.toasts.push(Toast {
            id,
            level,
            message,
            expires_at: now + self.lifetime,
        });
        if self.toasts.len() > self.max_visible {
            self.toasts.remove(0);
        }
        id
    }

    pub fn info(&mut self, message: impl Into<String>, now: Instant) -> ToastId {
        self.push(ToastLevel::Info, message, now)
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) -> ToastId {
        self.push(ToastLevel::Success, message, now)
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) -> ToastId {
        self.push(ToastLevel::Error, message, now)
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Drop expired toasts; returns whether any were removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        self.toasts.len() != before
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_toast_is_evicted_and_expiry_clears() {
        let now = Instant::now();
        let mut toasts = ToastManager::default();
        let first = toasts.info("one", now);
        toasts.info("two", now);
        toasts.info("three", now);
        toasts.error("four", now);
        assert_eq!(toasts.toasts.len(), 3);
        assert!(toasts.toasts.iter().all(|t| t.id != first));

        assert!(toasts.expire(now + Duration::from_secs(5)));
        assert!(!toasts.has_toasts());
    }
}
