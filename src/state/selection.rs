//! Process-wide seller selection.
//!
//! Holds the seller directory and the currently selected seller. The
//! directory is fetched once; after that the selection changes only through
//! [`SelectionContext::select`]. Readers observe changes through a
//! `tokio::sync::watch` channel and never write to it.

use crate::api::DashboardApi;
use crate::api::error::ApiError;
use crate::api::resource::Resource;
use crate::models::SellerId;
use crate::state::fetch_state::FetchState;
use crate::state::widget::{BoundWidget, Completion, FetchBoundWidget, FetchJob, Phase, Ticket};
use crate::widgets::WidgetId;
use thiserror::Error;
use tokio::sync::watch;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The id is not in the seller directory, e.g. a stale id from an old list.
    #[error("Unknown seller: {0}")]
    UnknownSeller(SellerId),
}

#[derive(Debug)]
pub struct SelectionContext {
    directory: FetchBoundWidget<(), Vec<SellerId>>,
    sellers: Vec<SellerId>,
    selected: watch::Sender<Option<SellerId>>,
}

impl SelectionContext {
    pub fn new() -> Self {
        let (selected, _) = watch::channel(None);
        Self {
            directory: FetchBoundWidget::new(WidgetId::SellerDirectory, |_| Resource::Sellers),
            sellers: Vec::new(),
            selected,
        }
    }

    /// The directory request, the first time only. A failed load is not retried.
    pub fn begin_initialize(&mut self) -> Option<FetchJob> {
        self.directory.set_key(Some(()))
    }

    /// Fetches the directory and selects its first seller.
    ///
    /// On failure the directory stays empty, nothing is selected, and the
    /// error is returned for the caller to report.
    pub async fn initialize(&mut self, api: &dyn DashboardApi) -> Result<(), ApiError> {
        let Some(job) = self.begin_initialize() else {
            return Ok(());
        };
        let result = api.fetch(&job.resource).await;
        match self.complete(job.ticket, result) {
            Completion::Failed(e) => Err(e),
            _ => Ok(()),
        }
    }

    /// Selects `id`. Returns whether the selection changed.
    ///
    /// Re-selecting the current seller is not a change and notifies nobody.
    pub fn select(&self, id: &str) -> Result<bool, SelectionError> {
        if !self.sellers.iter().any(|s| s == id) {
            return Err(SelectionError::UnknownSeller(id.to_string()));
        }
        Ok(self.selected.send_if_modified(|current| {
            if current.as_deref() == Some(id) {
                return false;
            }
            *current = Some(id.to_string());
            true
        }))
    }

    /// Selects the seller `offset` places away from the current one, wrapping around.
    pub fn select_relative(&self, offset: isize) -> Result<bool, SelectionError> {
        let len = self.sellers.len();
        if len == 0 {
            return Ok(false);
        }
        let current = self
            .selected()
            .and_then(|id| self.sellers.iter().position(|s| *s == id))
            .unwrap_or(0);
        let next = (current as isize + offset).rem_euclid(len as isize) as usize;
        let id = self.sellers[next].clone();
        self.select(&id)
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<SellerId>> {
        self.selected.subscribe()
    }

    pub fn selected(&self) -> Option<SellerId> {
        self.selected.borrow().clone()
    }

    pub fn sellers(&self) -> &[SellerId] {
        &self.sellers
    }

    pub fn directory_state(&self) -> &FetchState<Vec<SellerId>> {
        self.directory.state()
    }
}

impl Default for SelectionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundWidget for SelectionContext {
    fn id(&self) -> WidgetId {
        WidgetId::SellerDirectory
    }

    fn phase(&self) -> Phase {
        self.directory.phase()
    }

    fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<serde_json::Value, ApiError>,
    ) -> Completion {
        let completion = self.directory.complete(ticket, result);
        if let Completion::Loaded = completion {
            let mut sellers: Vec<SellerId> = Vec::new();
            for id in self.directory.state().data().into_iter().flatten() {
                if !sellers.contains(id) {
                    sellers.push(id.clone());
                }
            }
            let first = sellers.first().cloned();
            self.sellers = sellers;
            self.selected.send_replace(first);
        }
        completion
    }
}
