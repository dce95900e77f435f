//! Transient notices shown in the corner of the screen.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: Level,
    pub text: String,
    pub created_at: Instant,
}

#[derive(Debug)]
pub struct Notifications {
    items: VecDeque<Notification>,
    ttl: Duration,
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            ttl,
        }
    }

    pub fn push(&mut self, level: Level, text: impl Into<String>) {
        self.push_at(level, text, Instant::now());
    }

    pub fn push_at(&mut self, level: Level, text: impl Into<String>, now: Instant) {
        self.items.push_back(Notification {
            level,
            text: text.into(),
            created_at: now,
        });
        while self.items.len() > MAX_VISIBLE {
            self.items.pop_front();
        }
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(Level::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(Level::Error, text);
    }

    /// Drops notices older than the time-to-live.
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.items
            .retain(|item| now.saturating_duration_since(item.created_at) < ttl);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_expire_after_ttl() {
        let mut notices = Notifications::new(Duration::from_secs(4));
        let start = Instant::now();
        notices.push_at(Level::Success, "saved", start);
        notices.push_at(Level::Error, "failed", start + Duration::from_secs(3));

        notices.expire(start + Duration::from_secs(5));
        let texts: Vec<_> = notices.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["failed"]);

        notices.expire(start + Duration::from_secs(8));
        assert!(notices.is_empty());
    }

    #[test]
    fn oldest_notice_is_dropped_when_full() {
        let mut notices = Notifications::new(Duration::from_secs(4));
        for index in 0..6 {
            notices.push(Level::Info, format!("n{index}"));
        }
        assert_eq!(notices.len(), MAX_VISIBLE);
        assert_eq!(notices.iter().next().map(|n| n.text.as_str()), Some("n2"));
    }
}
