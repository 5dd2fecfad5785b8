//! Unified messaging system for session operations

use crate::environment::Environment;
use crate::state::Phase;
use crate::widgets::Board;

// ANSI Color Codes for session messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_WARN: &str = "\x1b[1;33m"; // Bold Yellow
pub const COLOR_RESET: &str = "\x1b[0m";

/// Session-specific message types
#[derive(Debug, Clone)]
pub enum SessionMessage {
    /// Normal session start/shutdown messages
    Info(String),
    /// Success messages for completed operations
    Success(String),
    /// Widgets that ended in error
    Warn(String),
}

impl SessionMessage {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    pub fn warn(msg: impl Into<String>) -> Self {
        Self::Warn(msg.into())
    }

    /// Print the message with appropriate formatting
    pub fn print(&self) {
        match self {
            Self::Info(msg) => {
                println!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg);
            }
            Self::Success(msg) => {
                println!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg);
            }
            Self::Warn(msg) => {
                println!("{}[WARN]{} {}", COLOR_WARN, COLOR_RESET, msg);
            }
        }
    }
}

/// Print session startup message
pub fn print_session_starting(mode: &str, environment: &Environment) {
    SessionMessage::info(format!(
        "Starting {} mode against {} ({})",
        mode,
        environment.api_url(),
        environment
    ))
    .print();
}

/// Print session shutdown message
pub fn print_session_shutdown() {
    SessionMessage::info("Shutting down...").print();
}

/// Print the final phase of every mounted widget.
pub fn print_session_summary(board: &Board) {
    let widgets = board.mounted_widgets();
    let loaded = widgets
        .iter()
        .filter(|w| w.phase() == Phase::Loaded)
        .count();
    SessionMessage::info(format!("{} of {} widgets loaded", loaded, widgets.len())).print();
    for widget in widgets
        .iter()
        .filter(|w| w.phase() != Phase::Loaded)
    {
        SessionMessage::warn(format!("{}: {}", widget.id(), widget.phase())).print();
    }
    if let Some(seller) = board.selection().selected() {
        SessionMessage::info(format!("Selected seller: {}", seller)).print();
    }
}

/// Print session exit message
pub fn print_session_exit_success() {
    SessionMessage::success("seller-dash exited successfully").print();
}
