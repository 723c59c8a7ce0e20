//! Timed single-slot notice surface.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum NoticeState {
    Hidden,
    Visible { notice: Notice, shown_at: Instant },
}

#[derive(Clone, Debug)]
pub struct Notifier {
    duration: Duration,
    state: NoticeState,
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            state: NoticeState::Hidden,
        }
    }

    /// Shows a notice, replacing whatever is visible.
    pub fn show(&mut self, severity: Severity, message: impl Into<String>, now: Instant) {
        let notice = Notice {
            severity,
            message: message.into(),
        };
        tracing::debug!(severity = severity.label(), message = %notice.message, "notice");
        self.state = NoticeState::Visible {
            notice,
            shown_at: now,
        };
    }

    /// The visible notice at `now`, hiding it first if its time is up.
    pub fn current(&mut self, now: Instant) -> Option<&Notice> {
        if let NoticeState::Visible { shown_at, .. } = &self.state
            && now.saturating_duration_since(*shown_at) >= self.duration
        {
            self.state = NoticeState::Hidden;
        }
        match &self.state {
            NoticeState::Visible { notice, .. } => Some(notice),
            NoticeState::Hidden => None,
        }
    }

    pub fn dismiss(&mut self) {
        self.state = NoticeState::Hidden;
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            crate::model::DEFAULT_NOTICE_DURATION_MS,
        ))
    }
}

#[cfg(test)]
#[path = "tests/notify_tests.rs"]
mod tests;
