//! Session setup and initialization

use crate::api::{ApiClient, DashboardApi};
use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, OUTCOME_QUEUE_SIZE};
use crate::environment::Environment;
use crate::events::Event;
use crate::workers::core::EventSender;
use crate::workers::{FetchOutcome, Fetcher};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Answers to submitted fetch jobs
    pub outcome_receiver: mpsc::Receiver<FetchOutcome>,
    /// Runs fetch jobs against the API
    pub fetcher: Fetcher,
    /// Shutdown sender to stop the session
    pub shutdown_sender: broadcast::Sender<()>,
    /// The API being read
    pub environment: Environment,
}

/// Sets up a dashboard session
///
/// Builds the HTTP client for `env` and the channels shared by both modes.
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be built
pub fn setup_session(env: Environment) -> Result<SessionData, Box<dyn Error>> {
    let client = ApiClient::new(env.clone())?;
    Ok(session_with_api(Arc::new(client)))
}

/// Wires a session around any [`DashboardApi`].
pub fn session_with_api(api: Arc<dyn DashboardApi>) -> SessionData {
    let environment = api.environment().clone();
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (outcome_sender, outcome_receiver) = mpsc::channel::<FetchOutcome>(OUTCOME_QUEUE_SIZE);
    // Only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let fetcher = Fetcher::new(api, outcome_sender, EventSender::new(event_sender));

    SessionData {
        event_receiver,
        outcome_receiver,
        fetcher,
        shutdown_sender,
        environment,
    }
}
