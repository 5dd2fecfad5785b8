//! Widgets scoped to the selected seller.
//!
//! Every one of them is keyed by the seller id and issues its own request when
//! the selection changes. Nothing is shared between them.

use crate::api::resource::Resource;
use crate::consts::cli_consts::limits;
use crate::models::SellerId;
use crate::models::seller::{
    CategoryCount, EcommerceMetrics, MonthlyRevenue, ProductSales, RecentOrder, ReviewBucket,
    SellerDetails, SellerInsights,
};
use crate::state::{BoundWidget, FetchBoundWidget, FetchJob};
use crate::widgets::WidgetId;

#[derive(Debug)]
pub struct SellerWidgets {
    pub details: FetchBoundWidget<SellerId, SellerDetails>,
    pub metrics: FetchBoundWidget<SellerId, EcommerceMetrics>,
    pub sales_trend: FetchBoundWidget<SellerId, Vec<MonthlyRevenue>>,
    pub top_products: FetchBoundWidget<SellerId, Vec<ProductSales>>,
    pub recent_orders: FetchBoundWidget<SellerId, Vec<RecentOrder>>,
    pub reviews: FetchBoundWidget<SellerId, Vec<ReviewBucket>>,
    pub categories: FetchBoundWidget<SellerId, Vec<CategoryCount>>,
    pub insights: FetchBoundWidget<SellerId, SellerInsights>,
}

impl SellerWidgets {
    pub fn new() -> Self {
        Self {
            details: FetchBoundWidget::new(WidgetId::SellerDetails, |id: &SellerId| {
                Resource::SellerDetails(id.clone())
            }),
            metrics: FetchBoundWidget::new(WidgetId::SellerMetrics, |id: &SellerId| {
                Resource::SellerMetrics(id.clone())
            }),
            sales_trend: FetchBoundWidget::new(WidgetId::SellerSalesTrend, |id: &SellerId| {
                Resource::SellerSalesTrend(id.clone())
            }),
            top_products: FetchBoundWidget::new(WidgetId::SellerTopProducts, |id: &SellerId| {
                Resource::SellerTopProducts {
                    seller: id.clone(),
                    limit: limits::SELLER_TOP_ITEMS,
                }
            }),
            recent_orders: FetchBoundWidget::new(WidgetId::SellerRecentOrders, |id: &SellerId| {
                Resource::SellerRecentOrders {
                    seller: id.clone(),
                    limit: limits::SELLER_TOP_ITEMS,
                }
            }),
            reviews: FetchBoundWidget::new(WidgetId::SellerReviews, |id: &SellerId| {
                Resource::SellerReviewDistribution(id.clone())
            }),
            categories: FetchBoundWidget::new(WidgetId::SellerCategories, |id: &SellerId| {
                Resource::SellerCategoryDistribution(id.clone())
            }),
            insights: FetchBoundWidget::new(WidgetId::SellerInsights, |id: &SellerId| {
                Resource::SellerInsights(id.clone())
            }),
        }
    }

    /// Re-keys every widget to `seller`. With no seller they all go idle.
    pub fn set_seller(&mut self, seller: Option<SellerId>) -> Vec<FetchJob> {
        [
            self.details.set_key(seller.clone()),
            self.metrics.set_key(seller.clone()),
            self.sales_trend.set_key(seller.clone()),
            self.top_products.set_key(seller.clone()),
            self.recent_orders.set_key(seller.clone()),
            self.reviews.set_key(seller.clone()),
            self.categories.set_key(seller.clone()),
            self.insights.set_key(seller),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut dyn BoundWidget> {
        let widget: &mut dyn BoundWidget = match id {
            WidgetId::SellerDetails => &mut self.details,
            WidgetId::SellerMetrics => &mut self.metrics,
            WidgetId::SellerSalesTrend => &mut self.sales_trend,
            WidgetId::SellerTopProducts => &mut self.top_products,
            WidgetId::SellerRecentOrders => &mut self.recent_orders,
            WidgetId::SellerReviews => &mut self.reviews,
            WidgetId::SellerCategories => &mut self.categories,
            WidgetId::SellerInsights => &mut self.insights,
            _ => return None,
        };
        Some(widget)
    }

    pub fn widgets(&self) -> [&dyn BoundWidget; 8] {
        [
            &self.details,
            &self.metrics,
            &self.sales_trend,
            &self.top_products,
            &self.recent_orders,
            &self.reviews,
            &self.categories,
            &self.insights,
        ]
    }
}

impl Default for SellerWidgets {
    fn default() -> Self {
        Self::new()
    }
}
