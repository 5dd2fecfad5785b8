//! Server-sorted, server-paginated tables.
//!
//! A table is a [`FetchBoundWidget`] whose key is the (sort, page) pair. A sort
//! change resets the page inside the same key change, so it costs exactly one
//! request and never a request for the old page under the new order.

use crate::api::error::ApiError;
use crate::api::resource::{Resource, TableKind, TableQuery};
use crate::models::{PagePayload, SortDirection, SortSpec, TableRecord};
use crate::state::fetch_state::FetchState;
use crate::state::widget::{BoundWidget, Completion, FetchBoundWidget, FetchJob, Phase, Ticket};
use crate::widgets::WidgetId;

#[derive(Debug, Clone)]
pub struct TableConfig {
    pub kind: TableKind,
    pub page_size: u32,
    /// Order used before the user sorts; `None` leaves it to the server.
    pub initial_sort: Option<SortSpec>,
    /// Direction applied when a column other than the current one is chosen.
    pub new_key_direction: SortDirection,
}

impl TableConfig {
    pub fn new(kind: TableKind, page_size: u32) -> Self {
        Self {
            kind,
            page_size,
            initial_sort: None,
            new_key_direction: SortDirection::Ascending,
        }
    }

    pub fn with_initial_sort(mut self, sort: SortSpec) -> Self {
        self.initial_sort = Some(sort);
        self
    }
}

#[derive(Debug)]
pub struct PaginatedTable<P: PagePayload> {
    config: TableConfig,
    sort: Option<SortSpec>,
    current_page: u32,
    total_count: u64,
    widget: FetchBoundWidget<TableQuery, P>,
}

impl<P: PagePayload> PaginatedTable<P> {
    pub fn new(id: WidgetId, config: TableConfig) -> Self {
        let kind = config.kind;
        Self {
            sort: config.initial_sort.clone(),
            config,
            current_page: 1,
            total_count: 0,
            widget: FetchBoundWidget::new(id, move |query: &TableQuery| Resource::Table {
                kind,
                query: query.clone(),
            }),
        }
    }

    /// Starts on `page` instead of the first one. Pages below 1 become 1.
    pub fn starting_at(mut self, page: u32) -> Self {
        self.current_page = page.max(1);
        self
    }

    /// Starts with `sort` instead of the configured initial order.
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    fn query(&self) -> TableQuery {
        TableQuery {
            sort: self.sort.clone(),
            page: Some(self.current_page),
            limit: self.config.page_size,
        }
    }

    fn issue(&mut self) -> Option<FetchJob> {
        let query = self.query();
        self.widget.set_key(Some(query))
    }

    /// Requests the current page. Issues nothing if it is already requested.
    pub fn mount(&mut self) -> Option<FetchJob> {
        self.issue()
    }

    /// Sorts by `field`: the current column flips direction, another column
    /// starts in the configured direction. Always returns to page 1.
    ///
    /// Unknown columns, columns the server cannot order by, and any column
    /// of an unsortable table are ignored.
    pub fn request_sort(&mut self, field: &str) -> Option<FetchJob> {
        if !self.config.kind.sortable() || !P::Row::can_sort_by(field) {
            return None;
        }
        let direction = match &self.sort {
            Some(current) if current.key == field => current.direction.flipped(),
            _ => self.config.new_key_direction,
        };
        self.sort = Some(SortSpec::new(field, direction));
        self.current_page = 1;
        self.issue()
    }

    /// Sorts by the `index`-th column (0-based).
    pub fn request_sort_by_index(&mut self, index: usize) -> Option<FetchJob> {
        let column = P::Row::COLUMNS.get(index)?;
        self.request_sort(column.key)
    }

    /// Moves to page `page`. Ignored unless `1 <= page <= total_pages()`.
    pub fn go_to_page(&mut self, page: u32) -> Option<FetchJob> {
        if page < 1 || page > self.total_pages() {
            return None;
        }
        self.current_page = page;
        self.issue()
    }

    pub fn next_page(&mut self) -> Option<FetchJob> {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> Option<FetchJob> {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    pub fn first_page(&mut self) -> Option<FetchJob> {
        self.go_to_page(1)
    }

    pub fn last_page(&mut self) -> Option<FetchJob> {
        self.go_to_page(self.total_pages())
    }

    /// `ceil(total_count / page_size)` as of the last successful fetch.
    pub fn total_pages(&self) -> u32 {
        let size = u64::from(self.config.page_size.max(1));
        u32::try_from(self.total_count.div_ceil(size)).unwrap_or(u32::MAX)
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn state(&self) -> &FetchState<P> {
        self.widget.state()
    }

    /// Rows of the last successful response, exactly as the server ordered them.
    pub fn rows(&self) -> &[P::Row] {
        self.widget.state().data().map(|p| p.rows()).unwrap_or(&[])
    }

    /// Whether the page controls should be shown at all.
    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages() > 1
    }
}

impl<P: PagePayload> BoundWidget for PaginatedTable<P> {
    fn id(&self) -> WidgetId {
        self.widget.id()
    }

    fn phase(&self) -> Phase {
        self.widget.phase()
    }

    fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<serde_json::Value, ApiError>,
    ) -> Completion {
        let completion = self.widget.complete(ticket, result);
        if let Completion::Loaded = completion {
            if let Some(payload) = self.widget.state().data() {
                self.total_count = payload.total_count();
            }
        }
        completion
    }

    /// After a load that shrank the result set below the current page, moves
    /// to the last existing page and requests it.
    fn follow_up(&mut self) -> Option<FetchJob> {
        if self.widget.phase() != Phase::Loaded {
            return None;
        }
        let last = self.total_pages().max(1);
        if self.current_page <= last {
            return None;
        }
        self.current_page = last;
        self.issue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Page;
    use crate::models::tables::{OrderRow, SellerRow, SentimentAnalysis};
    use serde_json::json;

    fn orders_table() -> PaginatedTable<Page<OrderRow>> {
        PaginatedTable::new(
            WidgetId::OrdersTable,
            TableConfig::new(TableKind::Orders, 15)
                .with_initial_sort(SortSpec::descending("order_purchase_timestamp")),
        )
    }

    fn order_page(rows: usize, total: u64) -> serde_json::Value {
        let data: Vec<_> = (0..rows)
            .map(|i| {
                json!({
                    "order_id": format!("o{}", i),
                    "customer_unique_id": "c",
                    "order_status": "delivered",
                    "order_purchase_timestamp": "2018-01-01 10:00:00",
                    "total_value": 10.0
                })
            })
            .collect();
        json!({"data": data, "totalCount": total})
    }

    fn query_of(job: &FetchJob) -> &TableQuery {
        match &job.resource {
            Resource::Table { query, .. } => query,
            other => panic!("unexpected resource {:?}", other),
        }
    }

    /// Mounts the table and answers with `total` rows in total.
    fn loaded_table(total: u64) -> PaginatedTable<Page<OrderRow>> {
        let mut table = orders_table();
        let job = table.mount().unwrap();
        table.complete(job.ticket, Ok(order_page(15, total)));
        table
    }

    #[test]
    fn mount_uses_initial_sort_and_first_page() {
        let mut table = orders_table();
        let job = table.mount().unwrap();
        let query = query_of(&job);
        assert_eq!(query.page, Some(1));
        assert_eq!(query.limit, 15);
        assert_eq!(
            query.sort,
            Some(SortSpec::descending("order_purchase_timestamp"))
        );
        assert!(table.mount().is_none());
    }

    #[test]
    fn total_pages_rounds_up() {
        let table = loaded_table(42);
        assert_eq!(table.total_pages(), 3);
        assert_eq!(table.rows().len(), 15);
    }

    #[test]
    fn next_next_previous_lands_on_page_two() {
        let mut table = loaded_table(42);

        let job = table.next_page().unwrap();
        table.complete(job.ticket, Ok(order_page(15, 42)));
        let job = table.next_page().unwrap();
        table.complete(job.ticket, Ok(order_page(12, 42)));
        let last_job = table.previous_page().unwrap();
        table.complete(last_job.ticket, Ok(order_page(15, 42)));

        assert_eq!(table.current_page(), 2);
        assert_eq!(query_of(&last_job).page, Some(2));
    }

    #[test]
    fn out_of_range_pages_are_ignored() {
        let mut table = loaded_table(42);
        assert!(table.go_to_page(0).is_none());
        assert!(table.go_to_page(4).is_none());
        assert_eq!(table.current_page(), 1);
        assert!(table.state().data().is_some());
    }

    #[test]
    fn navigation_before_first_load_is_ignored() {
        let mut table = orders_table();
        assert_eq!(table.total_pages(), 0);
        assert!(table.next_page().is_none());
        assert!(!table.has_multiple_pages());
    }

    #[test]
    fn sorting_from_page_four_issues_one_request_for_page_one() {
        let mut table = loaded_table(100);
        let job = table.go_to_page(4).unwrap();
        table.complete(job.ticket, Ok(order_page(15, 100)));

        let job = table.request_sort("total_value").unwrap();
        let query = query_of(&job);
        assert_eq!(query.page, Some(1));
        assert_eq!(query.sort, Some(SortSpec::ascending("total_value")));
        assert_eq!(table.current_page(), 1);
        assert!(table.state().is_loading());
    }

    #[test]
    fn sorting_same_column_flips_direction() {
        let mut table = loaded_table(42);
        let job = table.request_sort("order_purchase_timestamp").unwrap();
        assert_eq!(
            query_of(&job).sort,
            Some(SortSpec::ascending("order_purchase_timestamp"))
        );
        let job = table.request_sort("order_purchase_timestamp").unwrap();
        assert_eq!(
            query_of(&job).sort,
            Some(SortSpec::descending("order_purchase_timestamp"))
        );
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let mut table = loaded_table(42);
        assert!(table.request_sort("revenue").is_none());
        assert!(table.request_sort_by_index(9).is_none());
        assert_eq!(
            table.sort(),
            Some(&SortSpec::descending("order_purchase_timestamp"))
        );
    }

    #[test]
    fn stale_page_response_is_discarded() {
        let mut table = loaded_table(42);
        let page2 = table.next_page().unwrap();
        let page1 = table.previous_page().unwrap();

        table.complete(page1.ticket, Ok(order_page(15, 42)));
        assert!(matches!(
            table.complete(page2.ticket, Ok(order_page(3, 42))),
            Completion::Discarded
        ));
        assert_eq!(table.rows().len(), 15);
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn shrinking_result_set_clamps_and_refetches() {
        let mut table = loaded_table(45);
        let job = table.go_to_page(3).unwrap();
        table.complete(job.ticket, Ok(order_page(0, 20)));

        let follow_up = table.follow_up().unwrap();
        assert_eq!(table.current_page(), 2);
        assert_eq!(query_of(&follow_up).page, Some(2));
        assert!(table.follow_up().is_none());
    }

    #[test]
    fn empty_result_set_stays_on_page_one() {
        let mut table = orders_table();
        let job = table.mount().unwrap();
        table.complete(job.ticket, Ok(order_page(0, 0)));
        assert!(table.follow_up().is_none());
        assert_eq!(table.total_pages(), 0);
        assert!(table.rows().is_empty());
        assert_eq!(table.phase(), Phase::Loaded);
    }

    #[test]
    fn reviews_table_cannot_be_sorted() {
        let mut table: PaginatedTable<SentimentAnalysis> = PaginatedTable::new(
            WidgetId::ReviewsTable,
            TableConfig::new(TableKind::Reviews, 10),
        );
        table.mount();
        assert!(table.request_sort("review_score").is_none());
    }

    #[test]
    fn sellers_sort_only_by_server_ordered_columns() {
        let mut table: PaginatedTable<Page<SellerRow>> = PaginatedTable::new(
            WidgetId::SellersTable,
            TableConfig::new(TableKind::Sellers, 15)
                .with_initial_sort(SortSpec::descending("total_revenue")),
        );
        let job = table.mount().unwrap();
        table.complete(
            job.ticket,
            Ok(json!({
                "data": [{
                    "seller_id": "s1",
                    "seller_city": "guariba",
                    "seller_state": "SP",
                    "total_revenue": 229472.63,
                    "unique_order_count": 1132
                }],
                "totalCount": 3095
            })),
        );
        assert_eq!(table.phase(), Phase::Loaded);

        assert!(table.request_sort("seller_city").is_none());
        assert!(table.request_sort_by_index(1).is_none());
        assert_eq!(table.sort(), Some(&SortSpec::descending("total_revenue")));

        let job = table.request_sort("unique_order_count").unwrap();
        assert_eq!(
            query_of(&job).sort,
            Some(SortSpec::ascending("unique_order_count"))
        );
    }
}
