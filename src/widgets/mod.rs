//! The dashboard's widgets and the board that owns them.
//!
//! [`Board`] holds the selection and every data-bound widget, turns page
//! mounts and user input into [`FetchJob`]s, and applies the outcomes that
//! come back. It is owned by a single loop and never shared.

pub mod overview;
pub mod seller;
pub mod tables;

use crate::api::resource::{Resource, TableKind};
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType};
use crate::insights;
use crate::logging::LogLevel;
use crate::models::predictive::{PlatformPredictive, SellerPerformance};
use crate::models::{SellerId, SortSpec, TableRecord};
use crate::state::{
    BoundWidget, Completion, FetchBoundWidget, FetchJob, Phase, SelectionContext, SelectionError,
};
use crate::workers::FetchOutcome;
use overview::OverviewWidgets;
use seller::SellerWidgets;
use std::collections::HashSet;
use strum::IntoEnumIterator;
use tables::{TableControls, TableWidgets};
use tokio::sync::watch;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum WidgetId {
    #[strum(to_string = "Seller directory")]
    SellerDirectory,
    #[strum(to_string = "Platform KPIs")]
    PlatformKpis,
    #[strum(to_string = "Revenue trend")]
    RevenueTrend,
    #[strum(to_string = "Order status")]
    OrderStatus,
    #[strum(to_string = "Payment methods")]
    PaymentMethods,
    #[strum(to_string = "Sales by region")]
    SalesByRegion,
    #[strum(to_string = "Top products")]
    TopProducts,
    #[strum(to_string = "Top sellers by revenue")]
    TopSellersByRevenue,
    #[strum(to_string = "Top sellers by volume")]
    TopSellersByVolume,
    #[strum(to_string = "Seller details")]
    SellerDetails,
    #[strum(to_string = "Seller metrics")]
    SellerMetrics,
    #[strum(to_string = "Seller sales trend")]
    SellerSalesTrend,
    #[strum(to_string = "Seller top products")]
    SellerTopProducts,
    #[strum(to_string = "Seller recent orders")]
    SellerRecentOrders,
    #[strum(to_string = "Seller reviews")]
    SellerReviews,
    #[strum(to_string = "Seller categories")]
    SellerCategories,
    #[strum(to_string = "Seller insights")]
    SellerInsights,
    #[strum(to_string = "Orders")]
    OrdersTable,
    #[strum(to_string = "Products")]
    ProductsTable,
    #[strum(to_string = "Sellers")]
    SellersTable,
    #[strum(to_string = "Reviews")]
    ReviewsTable,
    #[strum(to_string = "Predictive insights")]
    PredictiveInsights,
}

/// A dashboard page. Mounting a page mounts all of its widgets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumIter)]
pub enum Page {
    #[default]
    Overview,
    Seller,
    Orders,
    Products,
    Sellers,
    Sentiment,
    Predictive,
}

impl Page {
    /// The paginated table shown on this page, if it has one.
    pub fn table_kind(self) -> Option<TableKind> {
        match self {
            Page::Orders => Some(TableKind::Orders),
            Page::Products => Some(TableKind::Products),
            Page::Sellers => Some(TableKind::Sellers),
            Page::Sentiment => Some(TableKind::Reviews),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        let pages: Vec<Page> = Page::iter().collect();
        let index = pages.iter().position(|p| *p == self).unwrap_or(0);
        pages[(index + 1) % pages.len()]
    }

    pub fn previous(self) -> Self {
        let pages: Vec<Page> = Page::iter().collect();
        let index = pages.iter().position(|p| *p == self).unwrap_or(0);
        pages[(index + pages.len() - 1) % pages.len()]
    }
}

/// What [`Board::apply`] did with one outcome.
#[derive(Debug)]
pub struct Applied {
    pub widget: WidgetId,
    pub resource: Resource,
    pub completion: Completion,
    /// Requests that became necessary as a result, to be submitted.
    pub jobs: Vec<FetchJob>,
    /// The new selection, when the outcome changed it.
    pub selection_changed: Option<SellerId>,
}

impl Applied {
    /// The activity-log entries describing this outcome.
    pub fn events(&self, classifier: &ErrorClassifier) -> Vec<Event> {
        let mut events = Vec::with_capacity(2);
        let is_directory = self.widget == WidgetId::SellerDirectory;
        let (msg, event_type, level) = match &self.completion {
            Completion::Loaded if is_directory => (
                "Seller directory loaded".to_string(),
                EventType::Success,
                LogLevel::Info,
            ),
            Completion::Loaded => ("Loaded".to_string(), EventType::Success, LogLevel::Info),
            Completion::Failed(e) => (
                e.user_message(),
                EventType::Error,
                classifier.classify_fetch_error(e),
            ),
            Completion::Discarded => (
                format!("Discarded stale response for {}", self.resource),
                EventType::Stale,
                LogLevel::Debug,
            ),
        };
        events.push(if is_directory {
            Event::selection_with_level(msg, event_type, level)
        } else {
            Event::widget_with_level(self.widget, msg, event_type, level)
        });
        if let Some(id) = &self.selection_changed {
            events.push(Event::selection_with_level(
                format!("Selected seller {}", id),
                EventType::SelectionChange,
                LogLevel::Info,
            ));
        }
        events
    }
}

#[derive(Debug)]
pub struct Board {
    selection: SelectionContext,
    selection_rx: watch::Receiver<Option<SellerId>>,
    mounted: HashSet<Page>,
    pub overview: OverviewWidgets,
    pub seller: SellerWidgets,
    pub tables: TableWidgets,
    pub predictive: FetchBoundWidget<(), PlatformPredictive>,
    performance_sort: SortSpec,
}

impl Board {
    pub fn new() -> Self {
        let selection = SelectionContext::new();
        let selection_rx = selection.subscribe();
        Self {
            selection,
            selection_rx,
            mounted: HashSet::new(),
            overview: OverviewWidgets::new(),
            seller: SellerWidgets::new(),
            tables: TableWidgets::new(),
            predictive: FetchBoundWidget::new(WidgetId::PredictiveInsights, |_| {
                Resource::PlatformPredictive
            }),
            performance_sort: insights::default_performance_sort(),
        }
    }

    /// Requests the seller directory. Only the first call issues anything.
    pub fn start(&mut self) -> Vec<FetchJob> {
        self.selection.begin_initialize().into_iter().collect()
    }

    pub fn selection(&self) -> &SelectionContext {
        &self.selection
    }

    /// Mounts `page`, returning the requests its widgets need.
    /// Pages stay mounted; mounting again only fetches what has no request yet.
    pub fn mount(&mut self, page: Page) -> Vec<FetchJob> {
        self.mounted.insert(page);
        match page {
            Page::Overview => self.overview.mount(),
            Page::Seller => self.seller.set_seller(self.selection.selected()),
            Page::Predictive => self.predictive.set_key(Some(())).into_iter().collect(),
            table_page => table_page
                .table_kind()
                .and_then(|kind| self.tables.mount(kind))
                .into_iter()
                .collect(),
        }
    }

    /// Picks up a selection change, re-keying the seller widgets when their
    /// page is mounted. Each change is seen once.
    fn sync_selection(&mut self) -> (Vec<FetchJob>, Option<SellerId>) {
        if !self.selection_rx.has_changed().unwrap_or(false) {
            return (Vec::new(), None);
        }
        let selected = self.selection_rx.borrow_and_update().clone();
        let jobs = if self.mounted.contains(&Page::Seller) {
            self.seller.set_seller(selected.clone())
        } else {
            Vec::new()
        };
        (jobs, selected)
    }

    /// Selects `id` and returns the requests the change causes.
    pub fn select_seller(&mut self, id: &str) -> Result<Vec<FetchJob>, SelectionError> {
        self.selection.select(id)?;
        Ok(self.sync_selection().0)
    }

    /// Moves the selection `offset` sellers along the directory, wrapping.
    pub fn select_relative(&mut self, offset: isize) -> Result<Vec<FetchJob>, SelectionError> {
        self.selection.select_relative(offset)?;
        Ok(self.sync_selection().0)
    }

    /// Selects the seller asked for at startup in place of the directory
    /// default. `applied` then reports and requests only the requested seller.
    pub fn select_requested(
        &mut self,
        applied: &mut Applied,
        id: &str,
    ) -> Result<(), SelectionError> {
        let jobs = self.select_seller(id)?;
        applied
            .jobs
            .retain(|queued| !jobs.iter().any(|job| job.widget == queued.widget));
        applied.jobs.extend(jobs);
        applied.selection_changed = Some(id.to_string());
        Ok(())
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut dyn BoundWidget> {
        match id {
            WidgetId::SellerDirectory => Some(&mut self.selection),
            WidgetId::PredictiveInsights => Some(&mut self.predictive),
            other => self
                .overview
                .widget_mut(other)
                .or_else(|| self.seller.widget_mut(other))
                .or_else(|| self.tables.widget_mut(other)),
        }
    }

    /// Hands an outcome to its widget.
    pub fn apply(&mut self, outcome: FetchOutcome) -> Applied {
        let FetchOutcome {
            widget,
            ticket,
            resource,
            result,
        } = outcome;
        let (completion, follow_up) = match self.widget_mut(widget) {
            Some(target) => {
                let completion = target.complete(ticket, result);
                (completion, target.follow_up())
            }
            None => (Completion::Discarded, None),
        };
        let mut jobs: Vec<FetchJob> = follow_up.into_iter().collect();
        let (selection_jobs, selected) = self.sync_selection();
        jobs.extend(selection_jobs);
        Applied {
            widget,
            resource,
            completion,
            jobs,
            selection_changed: selected,
        }
    }

    /// The selection followed by every widget of every mounted page, in page order.
    pub fn mounted_widgets(&self) -> Vec<&dyn BoundWidget> {
        let mut widgets: Vec<&dyn BoundWidget> = Vec::new();
        widgets.push(&self.selection);
        for page in Page::iter().filter(|p| self.mounted.contains(p)) {
            match page {
                Page::Overview => widgets.extend(self.overview.widgets()),
                Page::Seller => widgets.extend(self.seller.widgets()),
                Page::Predictive => widgets.push(&self.predictive),
                table_page => {
                    if let Some(kind) = table_page.table_kind() {
                        widgets.push(self.tables.widget(kind));
                    }
                }
            }
        }
        widgets
    }

    /// True when nothing mounted is waiting on the network.
    pub fn is_settled(&self) -> bool {
        self.mounted_widgets()
            .iter()
            .all(|w| w.phase() != Phase::Loading)
    }

    /// Widgets of mounted pages, by phase.
    pub fn phase_counts(&self) -> Vec<(Phase, usize)> {
        [Phase::Idle, Phase::Loading, Phase::Loaded, Phase::Error]
            .into_iter()
            .map(|phase| {
                let count = self
                    .mounted_widgets()
                    .iter()
                    .filter(|w| w.phase() == phase)
                    .count();
                (phase, count)
            })
            .collect()
    }

    pub fn table_mut(&mut self, page: Page) -> Option<&mut dyn TableControls> {
        page.table_kind().map(|kind| self.tables.get_mut(kind))
    }

    /// Sorts the table on `page` by its `index`-th column. On the predictive
    /// page this re-orders the loaded seller performance rows locally.
    pub fn sort_by_index(&mut self, page: Page, index: usize) -> Option<FetchJob> {
        if page == Page::Predictive {
            if let Some(column) = SellerPerformance::COLUMNS.get(index) {
                self.performance_sort =
                    insights::next_performance_sort(&self.performance_sort, column.key);
            }
            return None;
        }
        self.table_mut(page)?.request_sort_by_index(index)
    }

    pub fn performance_sort(&self) -> &SortSpec {
        &self.performance_sort
    }

    /// Seller performance rows in the current local order.
    pub fn seller_performance(&self) -> Vec<SellerPerformance> {
        self.predictive
            .state()
            .data()
            .map(|p| insights::sort_seller_performance(&p.seller_performance, &self.performance_sort))
            .unwrap_or_default()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::api::resource::TableQuery;
    use serde_json::{Value, json};

    fn answer(job: &FetchJob, body: Value) -> FetchOutcome {
        FetchOutcome {
            widget: job.widget,
            ticket: job.ticket,
            resource: job.resource.clone(),
            result: Ok(body),
        }
    }

    fn metrics_body() -> Value {
        json!({"customers": {"total": 3, "growth": 0}, "orders": {"total": 4, "growth": 0}})
    }

    fn find(jobs: &[FetchJob], widget: WidgetId) -> FetchJob {
        jobs.iter()
            .find(|j| j.widget == widget)
            .cloned()
            .unwrap_or_else(|| panic!("no job for {}", widget))
    }

    fn started_board(sellers: Value) -> (Board, Vec<FetchJob>) {
        let mut board = Board::new();
        let directory = board.start().remove(0);
        assert_eq!(directory.resource, Resource::Sellers);
        let applied = board.apply(answer(&directory, sellers));
        (board, applied.jobs)
    }

    #[test]
    fn seller_widgets_idle_until_a_seller_is_selected() {
        let mut board = Board::new();
        board.start();
        assert!(board.mount(Page::Seller).is_empty());
        assert!(board.seller.metrics.state().is_idle());
    }

    #[test]
    fn switching_seller_refetches_and_drops_late_answers() {
        let mut board = Board::new();
        let directory = board.start().remove(0);
        board.mount(Page::Seller);

        let applied = board.apply(answer(&directory, json!(["A", "B"])));
        assert_eq!(applied.selection_changed.as_deref(), Some("A"));
        assert_eq!(applied.jobs.len(), 8);
        let job_a = find(&applied.jobs, WidgetId::SellerMetrics);
        assert_eq!(job_a.resource.path(), "/api/sellers/A/ecommerce-metrics");

        let jobs = board.select_seller("B").unwrap();
        assert_eq!(jobs.len(), 8);
        let job_b = find(&jobs, WidgetId::SellerMetrics);
        assert_eq!(job_b.resource.path(), "/api/sellers/B/ecommerce-metrics");

        assert!(matches!(
            board.apply(answer(&job_b, metrics_body())).completion,
            Completion::Loaded
        ));
        assert!(matches!(
            board.apply(answer(&job_a, metrics_body())).completion,
            Completion::Discarded
        ));
        assert_eq!(board.seller.metrics.key().map(String::as_str), Some("B"));
    }

    #[test]
    fn reselecting_the_current_seller_fetches_nothing() {
        let (mut board, _) = started_board(json!(["A", "B"]));
        board.mount(Page::Seller);
        assert!(board.select_seller("A").unwrap().is_empty());
    }

    #[test]
    fn unknown_seller_is_rejected_without_requests() {
        let (mut board, _) = started_board(json!(["A"]));
        board.mount(Page::Seller);
        assert_eq!(
            board.select_seller("Z").unwrap_err(),
            SelectionError::UnknownSeller("Z".to_string())
        );
        assert_eq!(board.selection().selected().as_deref(), Some("A"));
    }

    #[test]
    fn mounting_the_seller_page_late_uses_current_selection() {
        let (mut board, jobs) = started_board(json!(["A", "B"]));
        assert!(jobs.is_empty());
        let jobs = board.mount(Page::Seller);
        assert_eq!(
            find(&jobs, WidgetId::SellerInsights).resource,
            Resource::SellerInsights("A".to_string())
        );
    }

    #[test]
    fn overview_mounts_once() {
        let mut board = Board::new();
        let jobs = board.mount(Page::Overview);
        assert_eq!(jobs.len(), 8);
        assert!(board.mount(Page::Overview).is_empty());
        assert!(!board.is_settled());

        let volume = find(&jobs, WidgetId::TopSellersByVolume);
        assert_eq!(
            volume.resource.to_string(),
            "/api/v2/sellers?sort_by=unique_order_count&order=DESC&limit=10"
        );
    }

    #[test]
    fn board_settles_when_every_mounted_widget_answers() {
        let mut board = Board::new();
        let jobs = board.mount(Page::Predictive);
        assert!(!board.is_settled());
        let job = &jobs[0];
        board.apply(FetchOutcome {
            widget: job.widget,
            ticket: job.ticket,
            resource: job.resource.clone(),
            result: Err(ApiError::Http {
                status: 503,
                message: String::new(),
            }),
        });
        assert!(board.is_settled());
        assert_eq!(board.predictive.phase(), Phase::Error);
    }

    #[test]
    fn sort_on_a_later_page_issues_one_request_for_page_one() {
        let mut board = Board::new();
        let job = board.mount(Page::Orders).remove(0);
        board.apply(answer(&job, json!({"data": [], "totalCount": 100})));
        for _ in 0..3 {
            let job = board.table_mut(Page::Orders).unwrap().next_page().unwrap();
            board.apply(answer(&job, json!({"data": [], "totalCount": 100})));
        }
        assert_eq!(board.tables.orders.current_page(), 4);

        // Column 4 is total_value.
        let job = board.sort_by_index(Page::Orders, 4).unwrap();
        match job.resource {
            Resource::Table {
                query: TableQuery { sort, page, .. },
                ..
            } => {
                assert_eq!(page, Some(1));
                assert_eq!(sort, Some(SortSpec::ascending("total_value")));
            }
            other => panic!("unexpected resource {:?}", other),
        }
    }

    #[test]
    fn shrinking_result_set_clamps_through_apply() {
        let mut board = Board::new();
        let job = board.mount(Page::Sellers).remove(0);
        board.apply(answer(&job, json!({"data": [], "totalCount": 45})));
        let job = board.table_mut(Page::Sellers).unwrap().last_page().unwrap();

        let applied = board.apply(answer(&job, json!({"data": [], "totalCount": 10})));
        assert_eq!(applied.jobs.len(), 1);
        assert_eq!(board.tables.sellers.current_page(), 1);
    }

    #[test]
    fn predictive_sort_is_local() {
        let mut board = Board::new();
        let job = board.mount(Page::Predictive).remove(0);
        board.apply(answer(
            &job,
            json!({
                "churn_analysis": {"predictions": [], "feature_importance": []},
                "sales_forecast": {},
                "seller_performance": [
                    {"seller_id": "a", "total_customers": 1, "high_risk_customers": 0,
                     "seller_churn_rate": 10.0, "affected_gmv": 5.0},
                    {"seller_id": "b", "total_customers": 9, "high_risk_customers": 3,
                     "seller_churn_rate": 30.0, "affected_gmv": 1.0}
                ]
            }),
        ));
        assert_eq!(board.seller_performance()[0].seller_id, "b");

        // Column 4 is affected_gmv, which starts descending.
        assert!(board.sort_by_index(Page::Predictive, 4).is_none());
        assert_eq!(board.seller_performance()[0].seller_id, "a");
    }

    #[test]
    fn applied_events_describe_the_outcome() {
        let classifier = ErrorClassifier::new();
        let mut board = Board::new();
        let job = board.mount(Page::Overview).remove(0);
        let applied = board.apply(FetchOutcome {
            widget: job.widget,
            ticket: job.ticket,
            resource: job.resource.clone(),
            result: Err(ApiError::Http {
                status: 404,
                message: String::new(),
            }),
        });
        let events = applied.events(&classifier);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, EventType::Error);
        assert_eq!(events[0].log_level, LogLevel::Warn);

        let stale = board.apply(answer(&job, json!({})));
        assert_eq!(stale.events(&classifier)[0].event_type, EventType::Stale);
    }

    #[test]
    fn pages_cycle_in_both_directions() {
        assert_eq!(Page::Overview.next(), Page::Seller);
        assert_eq!(Page::Overview.previous(), Page::Predictive);
        assert_eq!(Page::Predictive.next(), Page::Overview);
    }
}
