//! Dashboard state management
//!
//! Contains the dashboard state struct: the widget board plus everything the
//! screen needs around it.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::error_classifier::ErrorClassifier;
use crate::events::Event as WorkerEvent;
use crate::models::SellerId;
use crate::ui::app::UIConfig;
use crate::widgets::{Board, Page};

use std::collections::VecDeque;
use std::time::Instant;

/// Running tallies of fetch outcomes, shown in the info panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchTally {
    pub loaded: usize,
    pub failed: usize,
    pub stale: usize,
}

#[derive(Debug)]
pub struct DashboardState {
    /// The API the dashboard is reading from.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Every widget and the seller selection.
    pub board: Board,
    /// The page currently on screen.
    pub page: Page,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    pub tally: FetchTally,
    /// Animation tick counter
    pub tick: usize,

    /// Seller requested on the command line, applied once the directory loads.
    pending_seller: Option<SellerId>,
    classifier: ErrorClassifier,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment,
            start_time,
            board: Board::new(),
            page: Page::default(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tally: FetchTally::default(),
            tick: 0,
            pending_seller: ui_config.initial_seller,
            classifier: ErrorClassifier::new(),
        }
    }

    pub fn classifier(&self) -> &ErrorClassifier {
        &self.classifier
    }

    pub(super) fn take_pending_seller(&mut self) -> Option<SellerId> {
        self.pending_seller.take()
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
