//! Platform-wide widgets of the overview page. None of them has a key beyond
//! being mounted.

use crate::api::resource::{Resource, TableKind, TableQuery};
use crate::consts::cli_consts::limits;
use crate::models::platform::{Distribution, PlatformKpis, RevenueTrend, TopSellerRevenue};
use crate::models::seller::ProductSales;
use crate::models::tables::SellerRow;
use crate::models::{Page, SortSpec};
use crate::state::{BoundWidget, FetchBoundWidget, FetchJob};
use crate::widgets::WidgetId;

#[derive(Debug)]
pub struct OverviewWidgets {
    pub kpis: FetchBoundWidget<(), PlatformKpis>,
    pub revenue_trend: FetchBoundWidget<(), RevenueTrend>,
    pub order_status: FetchBoundWidget<(), Distribution>,
    pub payment_methods: FetchBoundWidget<(), Distribution>,
    pub sales_by_region: FetchBoundWidget<(), Distribution>,
    pub top_products: FetchBoundWidget<(), Vec<ProductSales>>,
    pub top_sellers_by_revenue: FetchBoundWidget<(), Vec<TopSellerRevenue>>,
    /// The sellers endpoint asked for its busiest sellers, one unpaged window.
    pub top_sellers_by_volume: FetchBoundWidget<(), Page<SellerRow>>,
}

impl OverviewWidgets {
    pub fn new() -> Self {
        Self {
            kpis: FetchBoundWidget::new(WidgetId::PlatformKpis, |_| Resource::PlatformKpis),
            revenue_trend: FetchBoundWidget::new(WidgetId::RevenueTrend, |_| {
                Resource::RevenueTrend
            }),
            order_status: FetchBoundWidget::new(WidgetId::OrderStatus, |_| {
                Resource::OrderStatusDistribution
            }),
            payment_methods: FetchBoundWidget::new(WidgetId::PaymentMethods, |_| {
                Resource::PaymentMethodDistribution
            }),
            sales_by_region: FetchBoundWidget::new(WidgetId::SalesByRegion, |_| {
                Resource::SalesByRegion
            }),
            top_products: FetchBoundWidget::new(WidgetId::TopProducts, |_| {
                Resource::PlatformTopProducts
            }),
            top_sellers_by_revenue: FetchBoundWidget::new(WidgetId::TopSellersByRevenue, |_| {
                Resource::TopSellersByRevenue
            }),
            top_sellers_by_volume: FetchBoundWidget::new(WidgetId::TopSellersByVolume, |_| {
                Resource::Table {
                    kind: TableKind::Sellers,
                    query: TableQuery {
                        sort: Some(SortSpec::descending("unique_order_count")),
                        page: None,
                        limit: limits::TOP_SELLERS_BY_VOLUME,
                    },
                }
            }),
        }
    }

    pub fn mount(&mut self) -> Vec<FetchJob> {
        [
            self.kpis.set_key(Some(())),
            self.revenue_trend.set_key(Some(())),
            self.order_status.set_key(Some(())),
            self.payment_methods.set_key(Some(())),
            self.sales_by_region.set_key(Some(())),
            self.top_products.set_key(Some(())),
            self.top_sellers_by_revenue.set_key(Some(())),
            self.top_sellers_by_volume.set_key(Some(())),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut dyn BoundWidget> {
        let widget: &mut dyn BoundWidget = match id {
            WidgetId::PlatformKpis => &mut self.kpis,
            WidgetId::RevenueTrend => &mut self.revenue_trend,
            WidgetId::OrderStatus => &mut self.order_status,
            WidgetId::PaymentMethods => &mut self.payment_methods,
            WidgetId::SalesByRegion => &mut self.sales_by_region,
            WidgetId::TopProducts => &mut self.top_products,
            WidgetId::TopSellersByRevenue => &mut self.top_sellers_by_revenue,
            WidgetId::TopSellersByVolume => &mut self.top_sellers_by_volume,
            _ => return None,
        };
        Some(widget)
    }

    pub fn widgets(&self) -> [&dyn BoundWidget; 8] {
        [
            &self.kpis,
            &self.revenue_trend,
            &self.order_status,
            &self.payment_methods,
            &self.sales_by_region,
            &self.top_products,
            &self.top_sellers_by_revenue,
            &self.top_sellers_by_volume,
        ]
    }
}

impl Default for OverviewWidgets {
    fn default() -> Self {
        Self::new()
    }
}
