//! Core worker utilities

use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::widgets::WidgetId;
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone, Debug)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    pub async fn send_widget_event(
        &self,
        widget: WidgetId,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::widget_with_level(
            widget, message, event_type, log_level,
        ))
        .await;
    }
}
