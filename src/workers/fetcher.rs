//! Executes widget fetch jobs on the runtime.
//!
//! Each job runs as its own task. Results come back over a channel and are
//! applied by whoever owns the widgets, so widget state never crosses threads.
//! Requests are not cancelled when their widget moves on; the stale answer is
//! dropped on arrival instead.

use super::core::EventSender;
use crate::api::DashboardApi;
use crate::api::error::ApiError;
use crate::api::resource::Resource;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::state::{FetchJob, Ticket};
use crate::widgets::WidgetId;
use std::sync::Arc;
use tokio::sync::mpsc;

/// The answer to one [`FetchJob`].
#[derive(Debug)]
pub struct FetchOutcome {
    pub widget: WidgetId,
    pub ticket: Ticket,
    pub resource: Resource,
    pub result: Result<serde_json::Value, ApiError>,
}

/// Somewhere fetch jobs can be handed off to.
pub trait RequestSink {
    fn submit(&self, job: FetchJob);

    fn submit_all(&self, jobs: Vec<FetchJob>) {
        for job in jobs {
            self.submit(job);
        }
    }
}

#[derive(Clone)]
pub struct Fetcher {
    api: Arc<dyn DashboardApi>,
    outcomes: mpsc::Sender<FetchOutcome>,
    event_sender: EventSender,
}

impl Fetcher {
    pub fn new(
        api: Arc<dyn DashboardApi>,
        outcomes: mpsc::Sender<FetchOutcome>,
        event_sender: EventSender,
    ) -> Self {
        Self {
            api,
            outcomes,
            event_sender,
        }
    }
}

impl RequestSink for Fetcher {
    fn submit(&self, job: FetchJob) {
        let api = self.api.clone();
        let outcomes = self.outcomes.clone();
        let events = self.event_sender.clone();
        tokio::spawn(async move {
            events
                .send_widget_event(
                    job.widget,
                    format!("Fetching {}", job.resource),
                    EventType::Refresh,
                    LogLevel::Debug,
                )
                .await;
            let result = api.fetch(&job.resource).await;
            let _ = outcomes
                .send(FetchOutcome {
                    widget: job.widget,
                    ticket: job.ticket,
                    resource: job.resource,
                    result,
                })
                .await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockDashboardApi;
    use mockall::predicate::eq;
    use serde_json::json;

    #[tokio::test]
    async fn outcome_carries_ticket_and_body() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch()
            .with(eq(Resource::PlatformKpis))
            .times(1)
            .returning(|_| Ok(json!({"total_orders": 1})));

        let (outcome_tx, mut outcome_rx) = mpsc::channel(4);
        let (event_tx, mut event_rx) = mpsc::channel(4);
        let fetcher = Fetcher::new(Arc::new(api), outcome_tx, EventSender::new(event_tx));

        fetcher.submit(FetchJob {
            widget: WidgetId::PlatformKpis,
            ticket: 7,
            resource: Resource::PlatformKpis,
        });

        let outcome = outcome_rx.recv().await.unwrap();
        assert_eq!(outcome.widget, WidgetId::PlatformKpis);
        assert_eq!(outcome.ticket, 7);
        assert_eq!(outcome.result.unwrap()["total_orders"], 1);

        let event = event_rx.recv().await.unwrap();
        assert_eq!(event.event_type, EventType::Refresh);
    }

    #[tokio::test]
    async fn failures_are_delivered_not_swallowed() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch().returning(|_| {
            Err(ApiError::Http {
                status: 404,
                message: "Not Found".to_string(),
            })
        });

        let (outcome_tx, mut outcome_rx) = mpsc::channel(4);
        let (event_tx, _event_rx) = mpsc::channel(4);
        let fetcher = Fetcher::new(Arc::new(api), outcome_tx, EventSender::new(event_tx));
        fetcher.submit(FetchJob {
            widget: WidgetId::SellerMetrics,
            ticket: 1,
            resource: Resource::SellerMetrics("s1".to_string()),
        });

        let outcome = outcome_rx.recv().await.unwrap();
        assert!(matches!(
            outcome.result,
            Err(ApiError::Http { status: 404, .. })
        ));
    }
}
