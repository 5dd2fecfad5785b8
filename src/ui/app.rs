//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::models::SellerId;
use crate::state::FetchJob;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::{FetchOutcome, RequestSink};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    /// Seller to select once the directory has loaded.
    pub initial_seller: Option<SellerId>,
}

impl UIConfig {
    pub fn new(with_background_color: bool, initial_seller: Option<SellerId>) -> Self {
        Self {
            with_background_color,
            initial_seller,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The dashboard pages.
    Dashboard,
}

/// Application state
pub struct App<S: RequestSink> {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Widgets load behind the splash screen, so the state exists from the start.
    dashboard: Box<DashboardState>,

    /// Runs the requests the dashboard asks for.
    fetcher: S,

    /// Receives fetch outcomes from the fetcher.
    outcome_receiver: mpsc::Receiver<FetchOutcome>,

    /// Receives events from worker tasks.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Broadcasts shutdown signal to worker tasks.
    shutdown_sender: broadcast::Sender<()>,
}

impl<S: RequestSink> App<S> {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        fetcher: S,
        outcome_receiver: mpsc::Receiver<FetchOutcome>,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            dashboard: Box::new(DashboardState::new(
                environment,
                Instant::now(),
                ui_config,
            )),
            fetcher,
            outcome_receiver,
            event_receiver,
            shutdown_sender,
        }
    }

    fn submit(&self, jobs: Vec<FetchJob>) {
        self.fetcher.submit_all(jobs);
    }

    /// Applies every outcome and event that has arrived since the last frame.
    fn drain(&mut self) {
        while let Ok(outcome) = self.outcome_receiver.try_recv() {
            let jobs = self.dashboard.apply_outcome(outcome);
            self.submit(jobs);
        }
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dashboard.add_event(event);
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend, S: RequestSink>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    let jobs = app.dashboard.start();
    app.submit(jobs);

    // UI event loop
    loop {
        app.drain();

        if app.current_screen == Screen::Dashboard {
            app.dashboard.update();
        }
        terminal.draw(|f| render(f, app.current_screen, &app.dashboard))?;

        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }

                match app.current_screen {
                    // Any key press will skip the splash screen
                    Screen::Splash => app.current_screen = Screen::Dashboard,
                    Screen::Dashboard => {
                        let jobs = app.dashboard.handle_key(key);
                        app.submit(jobs);
                    }
                }
            }
        }
        // The fetch tasks run on other worker threads; let them make progress
        // between frames.
        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: Screen, dashboard: &DashboardState) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, dashboard),
    }
}
