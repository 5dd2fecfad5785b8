//! The paginated tables and the key-driven controls the UI drives them with.

use crate::api::resource::TableKind;
use crate::consts::cli_consts::page_size;
use crate::models::tables::{OrderRow, ProductRow, SellerRow, SentimentAnalysis};
use crate::models::{Page, PagePayload, SortSpec};
use crate::state::{BoundWidget, FetchJob, PaginatedTable, TableConfig};
use crate::widgets::WidgetId;

/// Type-erased handle on a [`PaginatedTable`], so pages can be driven
/// without knowing their row type.
pub trait TableControls {
    fn request_sort_by_index(&mut self, index: usize) -> Option<FetchJob>;
    fn next_page(&mut self) -> Option<FetchJob>;
    fn previous_page(&mut self) -> Option<FetchJob>;
    fn first_page(&mut self) -> Option<FetchJob>;
    fn last_page(&mut self) -> Option<FetchJob>;
}

impl<P: PagePayload> TableControls for PaginatedTable<P> {
    fn request_sort_by_index(&mut self, index: usize) -> Option<FetchJob> {
        PaginatedTable::request_sort_by_index(self, index)
    }

    fn next_page(&mut self) -> Option<FetchJob> {
        PaginatedTable::next_page(self)
    }

    fn previous_page(&mut self) -> Option<FetchJob> {
        PaginatedTable::previous_page(self)
    }

    fn first_page(&mut self) -> Option<FetchJob> {
        PaginatedTable::first_page(self)
    }

    fn last_page(&mut self) -> Option<FetchJob> {
        PaginatedTable::last_page(self)
    }
}

pub fn orders_config() -> TableConfig {
    TableConfig::new(TableKind::Orders, page_size::ORDERS)
        .with_initial_sort(SortSpec::descending("order_purchase_timestamp"))
}

pub fn products_config() -> TableConfig {
    TableConfig::new(TableKind::Products, page_size::PRODUCTS)
        .with_initial_sort(SortSpec::descending("sales_count"))
}

pub fn sellers_config() -> TableConfig {
    TableConfig::new(TableKind::Sellers, page_size::SELLERS)
        .with_initial_sort(SortSpec::descending("total_revenue"))
}

pub fn reviews_config() -> TableConfig {
    TableConfig::new(TableKind::Reviews, page_size::REVIEWS)
}

#[derive(Debug)]
pub struct TableWidgets {
    pub orders: PaginatedTable<Page<OrderRow>>,
    pub products: PaginatedTable<Page<ProductRow>>,
    pub sellers: PaginatedTable<Page<SellerRow>>,
    pub reviews: PaginatedTable<SentimentAnalysis>,
}

impl TableWidgets {
    pub fn new() -> Self {
        Self {
            orders: PaginatedTable::new(WidgetId::OrdersTable, orders_config()),
            products: PaginatedTable::new(WidgetId::ProductsTable, products_config()),
            sellers: PaginatedTable::new(WidgetId::SellersTable, sellers_config()),
            reviews: PaginatedTable::new(WidgetId::ReviewsTable, reviews_config()),
        }
    }

    pub fn get_mut(&mut self, kind: TableKind) -> &mut dyn TableControls {
        match kind {
            TableKind::Orders => &mut self.orders,
            TableKind::Products => &mut self.products,
            TableKind::Sellers => &mut self.sellers,
            TableKind::Reviews => &mut self.reviews,
        }
    }

    pub fn mount(&mut self, kind: TableKind) -> Option<FetchJob> {
        match kind {
            TableKind::Orders => self.orders.mount(),
            TableKind::Products => self.products.mount(),
            TableKind::Sellers => self.sellers.mount(),
            TableKind::Reviews => self.reviews.mount(),
        }
    }

    pub fn widget(&self, kind: TableKind) -> &dyn BoundWidget {
        match kind {
            TableKind::Orders => &self.orders,
            TableKind::Products => &self.products,
            TableKind::Sellers => &self.sellers,
            TableKind::Reviews => &self.reviews,
        }
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut dyn BoundWidget> {
        let widget: &mut dyn BoundWidget = match id {
            WidgetId::OrdersTable => &mut self.orders,
            WidgetId::ProductsTable => &mut self.products,
            WidgetId::SellersTable => &mut self.sellers,
            WidgetId::ReviewsTable => &mut self.reviews,
            _ => return None,
        };
        Some(widget)
    }
}

impl Default for TableWidgets {
    fn default() -> Self {
        Self::new()
    }
}
