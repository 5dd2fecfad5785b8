//! Headless mode execution
//!
//! Mounts every page, prints activity to the console, and stops once nothing
//! is waiting on the network.

use super::{
    SessionData,
    messages::{
        print_session_exit_success, print_session_shutdown, print_session_starting,
        print_session_summary,
    },
};
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::models::SellerId;
use crate::state::{BoundWidget, FetchJob, Phase};
use crate::widgets::{Board, Page};
use crate::workers::{FetchOutcome, RequestSink};
use std::error::Error;
use strum::IntoEnumIterator;

/// Runs the application in headless mode
///
/// # Arguments
/// * `session` - Session data from setup
/// * `initial_seller` - Seller to select once the directory has loaded
///
/// # Returns
/// * `Ok(())` - Every widget settled, or the user interrupted
pub async fn run_headless_mode(
    mut session: SessionData,
    initial_seller: Option<SellerId>,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });
    let mut shutdown_receiver = session.shutdown_sender.subscribe();

    let mut run = HeadlessRun::new(initial_seller);
    session.fetcher.submit_all(run.start());

    loop {
        tokio::select! {
            Some(outcome) = session.outcome_receiver.recv() => {
                let (events, jobs) = run.apply(outcome);
                for event in events.iter().filter(|e| e.should_display()) {
                    println!("{}", event);
                }
                session.fetcher.submit_all(jobs);
                if run.board.is_settled() {
                    break;
                }
            }
            Some(event) = session.event_receiver.recv() => {
                if event.should_display() {
                    println!("{}", event);
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    print_session_shutdown();
    print_session_summary(&run.board);
    print_session_exit_success();

    Ok(())
}

/// The board plus the one-off work of a headless run.
struct HeadlessRun {
    board: Board,
    classifier: ErrorClassifier,
    pending_seller: Option<SellerId>,
}

impl HeadlessRun {
    fn new(pending_seller: Option<SellerId>) -> Self {
        Self {
            board: Board::new(),
            classifier: ErrorClassifier::new(),
            pending_seller,
        }
    }

    fn start(&mut self) -> Vec<FetchJob> {
        let mut jobs = self.board.start();
        for page in Page::iter() {
            jobs.extend(self.board.mount(page));
        }
        jobs
    }

    fn apply(&mut self, outcome: FetchOutcome) -> (Vec<Event>, Vec<FetchJob>) {
        let mut applied = self.board.apply(outcome);
        let mut rejected = None;
        if self.board.selection().phase() == Phase::Loaded {
            if let Some(seller) = self.pending_seller.take() {
                if let Err(e) = self.board.select_requested(&mut applied, &seller) {
                    rejected = Some(Event::selection_with_level(
                        e.to_string(),
                        EventType::Error,
                        LogLevel::Warn,
                    ));
                }
            }
        }
        let mut events = applied.events(&self.classifier);
        events.extend(rejected);
        (events, applied.jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::resource::Resource;
    use crate::widgets::WidgetId;
    use serde_json::json;

    #[test]
    fn start_mounts_every_page() {
        let mut run = HeadlessRun::new(None);
        let jobs = run.start();
        // Directory, eight overview widgets, four tables and the predictive payload.
        assert_eq!(jobs.len(), 14);
        assert!(!run.board.is_settled());
    }

    #[test]
    fn requested_seller_replaces_the_default() {
        let mut run = HeadlessRun::new(Some("s2".to_string()));
        let jobs = run.start();
        let directory = jobs
            .iter()
            .find(|j| j.widget == WidgetId::SellerDirectory)
            .unwrap();
        let (events, jobs) = run.apply(FetchOutcome {
            widget: directory.widget,
            ticket: directory.ticket,
            resource: directory.resource.clone(),
            result: Ok(json!(["s1", "s2"])),
        });

        assert_eq!(run.board.selection().selected().as_deref(), Some("s2"));
        let selections: Vec<&str> = events
            .iter()
            .filter(|e| e.event_type == EventType::SelectionChange)
            .map(|e| e.msg.as_str())
            .collect();
        assert_eq!(selections, ["Selected seller s2"]);
        assert!(
            jobs.iter()
                .any(|j| j.resource == Resource::SellerInsights("s2".to_string()))
        );
        assert!(
            !jobs
                .iter()
                .any(|j| j.resource == Resource::SellerInsights("s1".to_string()))
        );
    }
}
