//! Event System
//!
//! Activity events emitted while widgets load, shown in the activity log
//! (TUI) or printed to stdout (headless).

use crate::logging::{LogLevel, should_log_with_env};
use crate::widgets::WidgetId;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The seller directory and selection.
    Selection,
    /// A data-bound widget.
    Widget(WidgetId),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    /// A response that arrived after its widget had moved on.
    Stale,
    SelectionChange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn widget_with_level(
        widget: WidgetId,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(Source::Widget(widget), msg, event_type, log_level)
    }

    pub fn selection_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Selection, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Source::Widget(id) => write!(
                f,
                "{} [{}] {}: {}",
                self.event_type, self.timestamp, id, self.msg
            ),
            Source::Selection => {
                write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_events_name_their_widget() {
        let event = Event::widget_with_level(
            WidgetId::PlatformKpis,
            "Loaded".to_string(),
            EventType::Success,
            LogLevel::Info,
        );
        let text = event.to_string();
        assert!(text.starts_with("Success ["));
        assert!(text.ends_with("Platform KPIs: Loaded"));
    }

    #[test]
    fn success_and_info_events_are_always_displayed() {
        let success = Event::selection_with_level(
            "Sellers loaded".to_string(),
            EventType::Success,
            LogLevel::Debug,
        );
        assert!(success.should_display());

        let warn = Event::widget_with_level(
            WidgetId::RevenueTrend,
            "Request failed".to_string(),
            EventType::Error,
            LogLevel::Warn,
        );
        assert!(warn.should_display());
    }
}
