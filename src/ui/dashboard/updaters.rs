//! Dashboard state update logic
//!
//! Everything that changes the dashboard: queued events, fetch outcomes and
//! key presses. Each entry point returns the requests it caused; the caller
//! submits them.

use super::state::DashboardState;

use crate::events::{Event as WorkerEvent, EventType};
use crate::logging::LogLevel;
use crate::state::{BoundWidget, Completion, FetchJob, Phase};
use crate::widgets::{Applied, Page, WidgetId};
use crate::workers::FetchOutcome;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl DashboardState {
    /// Requests the seller directory and mounts the first page.
    pub fn start(&mut self) -> Vec<FetchJob> {
        let mut jobs = self.board.start();
        jobs.extend(self.board.mount(self.page));
        jobs
    }

    /// Update the dashboard state with a new tick and the queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }
    }

    /// Applies one fetch outcome and logs what happened.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> Vec<FetchJob> {
        let mut applied = self.board.apply(outcome);
        match applied.completion {
            Completion::Loaded => self.tally.loaded += 1,
            Completion::Failed(_) => self.tally.failed += 1,
            Completion::Discarded => self.tally.stale += 1,
        }
        let rejected = if applied.widget == WidgetId::SellerDirectory {
            self.apply_pending_seller(&mut applied)
        } else {
            None
        };
        for event in applied.events(self.classifier()) {
            self.add_event(event);
        }
        if let Some(event) = rejected {
            self.add_event(event);
        }
        applied.jobs
    }

    /// Selects the seller asked for at startup, once the directory is known.
    /// Returns the warning to log when the directory does not contain it.
    fn apply_pending_seller(&mut self, applied: &mut Applied) -> Option<WorkerEvent> {
        if self.board.selection().phase() != Phase::Loaded {
            return None;
        }
        let seller = self.take_pending_seller()?;
        self.board
            .select_requested(applied, &seller)
            .err()
            .map(|e| {
                WorkerEvent::selection_with_level(e.to_string(), EventType::Error, LogLevel::Warn)
            })
    }

    fn log_selection(&mut self, seller: &str) {
        self.add_event(WorkerEvent::selection_with_level(
            format!("Selected seller {}", seller),
            EventType::SelectionChange,
            LogLevel::Info,
        ));
    }

    /// Shows `page`, mounting it on first visit.
    pub fn switch_page(&mut self, page: Page) -> Vec<FetchJob> {
        self.page = page;
        self.board.mount(page)
    }

    /// Handles a dashboard key press. Quit keys are handled by the caller.
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<FetchJob> {
        match key.code {
            KeyCode::Tab => self.switch_page(self.page.next()),
            KeyCode::BackTab => self.switch_page(self.page.previous()),
            KeyCode::Up | KeyCode::Down if self.page == Page::Seller => {
                let offset = if key.code == KeyCode::Up { -1 } else { 1 };
                match self.board.select_relative(offset) {
                    Ok(jobs) => {
                        if !jobs.is_empty() {
                            if let Some(seller) = self.board.selection().selected() {
                                self.log_selection(&seller);
                            }
                        }
                        jobs
                    }
                    Err(e) => {
                        self.add_event(WorkerEvent::selection_with_level(
                            e.to_string(),
                            EventType::Error,
                            LogLevel::Warn,
                        ));
                        Vec::new()
                    }
                }
            }
            KeyCode::Char(c @ '1'..='9') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let index = c as usize - '1' as usize;
                self.board.sort_by_index(self.page, index).into_iter().collect()
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Home | KeyCode::End => {
                let Some(table) = self.board.table_mut(self.page) else {
                    return Vec::new();
                };
                let job = match key.code {
                    KeyCode::Left => table.previous_page(),
                    KeyCode::Right => table.next_page(),
                    KeyCode::Home => table.first_page(),
                    _ => table.last_page(),
                };
                job.into_iter().collect()
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::resource::Resource;
    use crate::environment::Environment;
    use crate::ui::app::UIConfig;
    use serde_json::{Value, json};
    use std::time::Instant;

    fn dashboard(initial_seller: Option<&str>) -> DashboardState {
        DashboardState::new(
            Environment::Local,
            Instant::now(),
            UIConfig::new(false, initial_seller.map(str::to_string)),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn answer(job: &FetchJob, body: Value) -> FetchOutcome {
        FetchOutcome {
            widget: job.widget,
            ticket: job.ticket,
            resource: job.resource.clone(),
            result: Ok(body),
        }
    }

    #[test]
    fn start_requests_directory_and_overview() {
        let mut state = dashboard(None);
        let jobs = state.start();
        assert_eq!(jobs[0].resource, Resource::Sellers);
        assert_eq!(jobs.len(), 9);
    }

    #[test]
    fn tab_mounts_the_next_page() {
        let mut state = dashboard(None);
        state.start();
        let jobs = state.handle_key(key(KeyCode::Tab));
        assert_eq!(state.page, Page::Seller);
        // No seller yet, so nothing to fetch.
        assert!(jobs.is_empty());

        let jobs = state.handle_key(key(KeyCode::Tab));
        assert_eq!(state.page, Page::Orders);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].widget, WidgetId::OrdersTable);
    }

    #[test]
    fn startup_seller_is_selected_when_directory_arrives() {
        let mut state = dashboard(Some("s2"));
        let directory = state.start().remove(0);
        state.switch_page(Page::Seller);

        let jobs = state.apply_outcome(answer(&directory, json!(["s1", "s2"])));
        state.update();
        assert_eq!(state.board.selection().selected().as_deref(), Some("s2"));
        assert!(
            jobs.iter()
                .any(|j| j.resource == Resource::SellerMetrics("s2".to_string()))
        );
        assert!(
            !jobs
                .iter()
                .any(|j| j.resource == Resource::SellerMetrics("s1".to_string()))
        );
        let selections: Vec<&str> = state
            .activity_logs
            .iter()
            .filter(|e| e.event_type == EventType::SelectionChange)
            .map(|e| e.msg.as_str())
            .collect();
        assert_eq!(selections, ["Selected seller s2"]);
    }

    #[test]
    fn unknown_startup_seller_keeps_default_and_logs() {
        let mut state = dashboard(Some("nope"));
        let directory = state.start().remove(0);
        state.apply_outcome(answer(&directory, json!(["s1"])));
        state.update();

        assert_eq!(state.board.selection().selected().as_deref(), Some("s1"));
        assert!(
            state
                .activity_logs
                .iter()
                .any(|e| e.event_type == EventType::Error && e.msg.contains("nope"))
        );
    }

    #[test]
    fn arrows_change_seller_only_on_seller_page() {
        let mut state = dashboard(None);
        let directory = state.start().remove(0);
        state.apply_outcome(answer(&directory, json!(["s1", "s2"])));

        assert!(state.handle_key(key(KeyCode::Down)).is_empty());
        assert_eq!(state.board.selection().selected().as_deref(), Some("s1"));

        state.switch_page(Page::Seller);
        let jobs = state.handle_key(key(KeyCode::Down));
        assert_eq!(jobs.len(), 8);
        assert_eq!(state.board.selection().selected().as_deref(), Some("s2"));
    }

    #[test]
    fn outcomes_are_tallied_and_logged() {
        let mut state = dashboard(None);
        let jobs = state.start();
        let kpis = jobs
            .iter()
            .find(|j| j.widget == WidgetId::PlatformKpis)
            .unwrap();
        state.apply_outcome(answer(kpis, json!({"unexpected": true})));
        state.apply_outcome(answer(kpis, json!({})));
        state.update();

        assert_eq!(state.tally.failed, 1);
        assert_eq!(state.tally.stale, 1);
        assert_eq!(state.activity_logs.len(), 2);
    }
}
