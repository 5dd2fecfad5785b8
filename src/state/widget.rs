//! A unit of UI bound to one asynchronous load.
//!
//! The widget owns its [`FetchState`] and the key its data depends on. Changing
//! the key moves it to loading and hands back a [`FetchJob`] for the caller to
//! run; the answer comes back through [`FetchBoundWidget::complete`] together
//! with the ticket it was issued under. Only the answer to the latest job is
//! applied, so responses arriving out of order can never overwrite newer data.

use crate::api::error::ApiError;
use crate::api::resource::Resource;
use crate::state::fetch_state::FetchState;
use crate::widgets::WidgetId;
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Formatter};

/// Identifies one issued request of one widget. Increases on every key change.
pub type Ticket = u64;

/// A request a widget wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchJob {
    pub widget: WidgetId,
    pub ticket: Ticket,
    pub resource: Resource,
}

/// What happened to a response handed to a widget.
#[derive(Debug)]
pub enum Completion {
    /// The response was current and is now the widget's data.
    Loaded,
    /// The response was current and the widget is now in the error state.
    Failed(ApiError),
    /// The response belonged to a superseded request and was dropped.
    Discarded,
}

/// Data-free view of a [`FetchState`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Error,
}

impl<T> From<&FetchState<T>> for Phase {
    fn from(state: &FetchState<T>) -> Self {
        match state {
            FetchState::Idle => Phase::Idle,
            FetchState::Loading => Phase::Loading,
            FetchState::Loaded(_) => Phase::Loaded,
            FetchState::Error(_) => Phase::Error,
        }
    }
}

/// Object-safe face of every data-bound widget, used to route responses.
pub trait BoundWidget {
    fn id(&self) -> WidgetId;
    fn phase(&self) -> Phase;
    fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<serde_json::Value, ApiError>,
    ) -> Completion;

    /// A request the widget needs after a completion, if any.
    fn follow_up(&mut self) -> Option<FetchJob> {
        None
    }
}

type ResourceFn<K> = Box<dyn Fn(&K) -> Resource + Send + Sync>;

pub struct FetchBoundWidget<K, T> {
    id: WidgetId,
    key: Option<K>,
    state: FetchState<T>,
    ticket: Ticket,
    resource: ResourceFn<K>,
}

impl<K, T> FetchBoundWidget<K, T>
where
    K: Clone + PartialEq,
    T: DeserializeOwned,
{
    pub fn new(id: WidgetId, resource: impl Fn(&K) -> Resource + Send + Sync + 'static) -> Self {
        Self {
            id,
            key: None,
            state: FetchState::Idle,
            ticket: 0,
            resource: Box::new(resource),
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Points the widget at `key`.
    ///
    /// Returns the request to perform when the key differs from the current
    /// one, or when nothing has been requested for it yet. An absent key puts
    /// the widget back to idle, drops any data, and invalidates requests in
    /// flight; it never produces a request.
    pub fn set_key(&mut self, key: Option<K>) -> Option<FetchJob> {
        match key {
            None => {
                if self.key.is_some() || !self.state.is_idle() {
                    self.key = None;
                    self.state = FetchState::Idle;
                    self.ticket += 1;
                }
                None
            }
            Some(key) => {
                if self.key.as_ref() == Some(&key) && !self.state.is_idle() {
                    return None;
                }
                self.ticket += 1;
                self.state = FetchState::Loading;
                let resource = (self.resource)(&key);
                self.key = Some(key);
                Some(FetchJob {
                    widget: self.id,
                    ticket: self.ticket,
                    resource,
                })
            }
        }
    }
}

impl<K, T> BoundWidget for FetchBoundWidget<K, T>
where
    K: Clone + PartialEq,
    T: DeserializeOwned,
{
    fn id(&self) -> WidgetId {
        self.id
    }

    fn phase(&self) -> Phase {
        Phase::from(&self.state)
    }

    fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<serde_json::Value, ApiError>,
    ) -> Completion {
        if ticket != self.ticket || !self.state.is_loading() {
            return Completion::Discarded;
        }
        let decoded = result
            .and_then(|value| serde_json::from_value::<T>(value).map_err(ApiError::from));
        match decoded {
            Ok(data) => {
                self.state = FetchState::Loaded(data);
                Completion::Loaded
            }
            Err(e) => {
                self.state = FetchState::Error(e.user_message());
                Completion::Failed(e)
            }
        }
    }
}

impl<K: Debug, T> Debug for FetchBoundWidget<K, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchBoundWidget")
            .field("id", &self.id)
            .field("key", &self.key)
            .field("state", &self.state.label())
            .field("ticket", &self.ticket)
            .finish()
    }
}
