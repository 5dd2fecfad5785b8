//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::{Event, EventType, Source};
use crate::state::Phase;
use ratatui::prelude::Color;

/// Color of an activity-log line, by what emitted it.
pub fn get_event_color(event: &Event) -> Color {
    match (&event.source, event.event_type) {
        (_, EventType::Error) => Color::LightRed,
        (_, EventType::Stale) => Color::DarkGray,
        (Source::Selection, _) => Color::Yellow,
        (Source::Widget(_), EventType::Success) => Color::Green,
        (Source::Widget(_), _) => Color::Cyan,
    }
}

pub fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Idle => Color::DarkGray,
        Phase::Loading => Color::LightBlue,
        Phase::Loaded => Color::Green,
        Phase::Error => Color::LightRed,
    }
}

/// Color of an order status badge.
pub fn status_color(status: &str) -> Color {
    match status.to_ascii_lowercase().as_str() {
        "delivered" => Color::Green,
        "shipped" => Color::Blue,
        "canceled" => Color::Red,
        "unavailable" => Color::Gray,
        "invoiced" => Color::Magenta,
        "processing" => Color::Yellow,
        _ => Color::White,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // "YYYY-MM-DD HH:MM:SS" -> "MM-DD HH:MM"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_drops_year_and_seconds() {
        assert_eq!(format_compact_timestamp("2024-03-07 09:15:42"), "03-07 09:15");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn order_statuses_have_distinct_colors() {
        assert_eq!(status_color("Delivered"), Color::Green);
        assert_eq!(status_color("canceled"), Color::Red);
        assert_eq!(status_color("approved"), Color::White);
    }
}
