//! User-facing notices and the bounded feedback history
//!
//! Every workflow outcome produces exactly one current notice and one
//! durable history entry. The history is append-only and bounded; the
//! oldest entries are evicted first. Timestamps are plain display strings
//! supplied by the caller, which keeps this module clock-free.

use crate::api::BackendLog;
use std::collections::VecDeque;

/// History bound; oldest entries are dropped beyond this
pub const MAX_LOG_ENTRIES: usize = 100;

/// Severity of a notice or log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warn,
    Error,
    Debug,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Success => "success",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Debug => "debug",
        }
    }

    /// Fold a backend level string into a known level; unknown values
    /// become `Debug`.
    pub fn parse(value: &str) -> Level {
        match value.to_ascii_lowercase().as_str() {
            "info" => Level::Info,
            "success" => Level::Success,
            "warn" | "warning" => Level::Warn,
            "error" => Level::Error,
            _ => Level::Debug,
        }
    }
}

/// One display-ready entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackEntry {
    pub timestamp: String,
    pub level: Level,
    pub message: String,
}

/// Current notice plus the bounded append-only history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackLog {
    current: Option<FeedbackEntry>,
    history: VecDeque<FeedbackEntry>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a notice: replaces the current banner and appends to history
    pub fn push(&mut self, level: Level, message: impl Into<String>, timestamp: &str) {
        let entry = FeedbackEntry {
            timestamp: timestamp.to_string(),
            level,
            message: message.into(),
        };
        self.current = Some(entry.clone());
        self.history.push_back(entry);
        self.evict();
    }

    /// Append backend-forwarded log lines to the history without touching
    /// the current banner. They carry no control-flow significance.
    pub fn absorb_backend_logs(&mut self, logs: &[BackendLog], fallback_timestamp: &str) {
        for log in logs {
            self.history.push_back(FeedbackEntry {
                timestamp: log
                    .timestamp
                    .clone()
                    .unwrap_or_else(|| fallback_timestamp.to_string()),
                level: log.level.as_deref().map(Level::parse).unwrap_or(Level::Debug),
                message: log.message.clone(),
            });
        }
        self.evict();
    }

    /// Clear the banner if it still shows `message` (transient notices)
    pub fn clear_current_if(&mut self, message: &str) {
        if self
            .current
            .as_ref()
            .is_some_and(|entry| entry.message == message)
        {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&FeedbackEntry> {
        self.current.as_ref()
    }

    pub fn entries(&self) -> &VecDeque<FeedbackEntry> {
        &self.history
    }

    fn evict(&mut self) {
        while self.history.len() > MAX_LOG_ENTRIES {
            self.history.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_sets_current_and_history() {
        let mut log = FeedbackLog::new();
        log.push(Level::Success, "link generated", "12:00:00");
        assert_eq!(log.current().unwrap().message, "link generated");
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn test_history_bounded_oldest_evicted() {
        let mut log = FeedbackLog::new();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            log.push(Level::Info, format!("entry {i}"), "12:00:00");
        }
        assert_eq!(log.entries().len(), MAX_LOG_ENTRIES);
        assert_eq!(log.entries().front().unwrap().message, "entry 5");
        assert_eq!(
            log.entries().back().unwrap().message,
            format!("entry {}", MAX_LOG_ENTRIES + 4)
        );
    }

    #[test]
    fn test_absorb_backend_logs_keeps_banner() {
        let mut log = FeedbackLog::new();
        log.push(Level::Info, "validating...", "12:00:00");
        log.absorb_backend_logs(
            &[
                BackendLog {
                    timestamp: Some("2025-05-01T10:00:00Z".to_string()),
                    level: Some("WARNING".to_string()),
                    message: "group not found".to_string(),
                },
                BackendLog {
                    timestamp: None,
                    level: None,
                    message: "done".to_string(),
                },
            ],
            "12:00:01",
        );
        assert_eq!(log.current().unwrap().message, "validating...");
        assert_eq!(log.entries().len(), 3);
        assert_eq!(log.entries()[1].level, Level::Warn);
        assert_eq!(log.entries()[2].timestamp, "12:00:01");
        assert_eq!(log.entries()[2].level, Level::Debug);
    }

    #[test]
    fn test_clear_current_if_matches() {
        let mut log = FeedbackLog::new();
        log.push(Level::Success, "copied", "12:00:00");
        log.clear_current_if("something else");
        assert!(log.current().is_some());
        log.clear_current_if("copied");
        assert!(log.current().is_none());
        // history survives the banner reset
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn test_level_parse_unknown_folds_to_debug() {
        assert_eq!(Level::parse("INFO"), Level::Info);
        assert_eq!(Level::parse("warning"), Level::Warn);
        assert_eq!(Level::parse("trace"), Level::Debug);
    }
}
