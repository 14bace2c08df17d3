use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

const MAX_VISIBLE_NOTICES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Transient toast, dismissed automatically after a while.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub created: Instant,
}

/// Blocking message; input is ignored until it is acknowledged.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertState {
    pub message: String,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feedback {
    pub notices: Vec<Notice>,
    pub alert: Option<AlertState>,
}

impl Feedback {
    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(?kind, %message, "notice");
        self.notices.push(Notice {
            kind,
            message,
            created: Instant::now(),
        });
    }

    pub fn alert(&mut self, message: impl Into<String>) {
        self.alert = Some(AlertState {
            message: message.into(),
            timestamp: Local::now(),
        });
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn dismiss_notices(&mut self) {
        self.notices.clear();
    }

    pub fn expire(&mut self, now: Instant, ttl: Duration) {
        self.notices
            .retain(|n| now.saturating_duration_since(n.created) < ttl);
    }

    /// Newest last, at most a handful.
    #[must_use]
    pub fn visible_notices(&self) -> &[Notice] {
        let start = self.notices.len().saturating_sub(MAX_VISIBLE_NOTICES);
        &self.notices[start..]
    }

    #[must_use]
    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_expire() {
        let mut feedback = Feedback::default();
        feedback.notify(NoticeKind::Info, "Fetching latest news...");
        let created = feedback.notices[0].created;

        feedback.expire(created + Duration::from_secs(4), Duration::from_secs(5));
        assert_eq!(feedback.notices.len(), 1);

        feedback.expire(created + Duration::from_secs(5), Duration::from_secs(5));
        assert!(feedback.notices.is_empty());
    }

    #[test]
    fn test_only_latest_notices_visible() {
        let mut feedback = Feedback::default();
        for i in 0..5 {
            feedback.notify(NoticeKind::Success, format!("n{i}"));
        }
        let visible: Vec<_> = feedback
            .visible_notices()
            .iter()
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(visible, ["n2", "n3", "n4"]);
    }
}
