//! Endpoints of the analytics API.
//!
//! A [`Resource`] is one GET request: a path plus its query parameters.
//! Two resources compare equal exactly when they produce the same request.

use crate::models::{SellerId, SortSpec};
use std::fmt::{Display, Formatter};

/// The server-paginated collections.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TableKind {
    Orders,
    Products,
    Sellers,
    Reviews,
}

impl TableKind {
    pub fn path(self) -> &'static str {
        match self {
            TableKind::Orders => "/api/v2/orders",
            TableKind::Products => "/api/v2/products",
            TableKind::Sellers => "/api/v2/sellers",
            TableKind::Reviews => "/api/sentiment-analysis",
        }
    }

    /// Whether the endpoint honours `sort_by`/`order`.
    pub fn sortable(self) -> bool {
        !matches!(self, TableKind::Reviews)
    }
}

/// Query parameters of a paginated request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableQuery {
    pub sort: Option<SortSpec>,
    pub page: Option<u32>,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    Sellers,
    SellerDetails(SellerId),
    SellerMetrics(SellerId),
    SellerSalesTrend(SellerId),
    SellerTopProducts { seller: SellerId, limit: u32 },
    SellerRecentOrders { seller: SellerId, limit: u32 },
    SellerReviewDistribution(SellerId),
    SellerCategoryDistribution(SellerId),
    SellerInsights(SellerId),
    PlatformKpis,
    RevenueTrend,
    OrderStatusDistribution,
    PaymentMethodDistribution,
    SalesByRegion,
    PlatformTopProducts,
    TopSellersByRevenue,
    PlatformPredictive,
    Table { kind: TableKind, query: TableQuery },
}

fn seller_path(prefix: &str, seller: &str, metric: &str) -> String {
    format!("{}/{}/{}", prefix, urlencoding::encode(seller), metric)
}

impl Resource {
    pub fn path(&self) -> String {
        match self {
            Resource::Sellers => "/api/sellers".to_string(),
            Resource::SellerDetails(id) => {
                format!("/api/v2/sellers/{}", urlencoding::encode(id))
            }
            Resource::SellerMetrics(id) => seller_path("/api/sellers", id, "ecommerce-metrics"),
            Resource::SellerSalesTrend(id) => seller_path("/api/v2/sellers", id, "sales-trend"),
            Resource::SellerTopProducts { seller, .. } => {
                seller_path("/api/v2/sellers", seller, "top-products")
            }
            Resource::SellerRecentOrders { seller, .. } => {
                seller_path("/api/v2/sellers", seller, "recent-orders")
            }
            Resource::SellerReviewDistribution(id) => {
                seller_path("/api/v2/sellers", id, "review-distribution")
            }
            Resource::SellerCategoryDistribution(id) => {
                seller_path("/api/v2/sellers", id, "category-distribution")
            }
            Resource::SellerInsights(id) => {
                seller_path("/api/v2/sellers", id, "predictive-insights")
            }
            Resource::PlatformKpis => "/api/platform/kpis".to_string(),
            Resource::RevenueTrend => "/api/platform/revenue-trend".to_string(),
            Resource::OrderStatusDistribution => {
                "/api/platform/order-status-distribution".to_string()
            }
            Resource::PaymentMethodDistribution => {
                "/api/platform/payment-method-distribution".to_string()
            }
            Resource::SalesByRegion => "/api/platform/sales-by-region".to_string(),
            Resource::PlatformTopProducts => "/api/platform/top-products".to_string(),
            Resource::TopSellersByRevenue => "/api/platform/top-sellers-by-revenue".to_string(),
            Resource::PlatformPredictive => "/api/platform/predictive-insights".to_string(),
            Resource::Table { kind, .. } => kind.path().to_string(),
        }
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Resource::SellerTopProducts { limit, .. }
            | Resource::SellerRecentOrders { limit, .. } => vec![("limit", limit.to_string())],
            Resource::Table { kind, query } => {
                let mut params = Vec::with_capacity(4);
                if let Some(sort) = query.sort.as_ref().filter(|_| kind.sortable()) {
                    params.push(("sort_by", sort.key.clone()));
                    params.push(("order", sort.direction.as_query().to_string()));
                }
                if let Some(page) = query.page {
                    params.push(("page", page.to_string()));
                }
                params.push(("limit", query.limit.to_string()));
                params
            }
            _ => Vec::new(),
        }
    }

    /// The `page` parameter, for paginated resources.
    pub fn page(&self) -> Option<u32> {
        match self {
            Resource::Table { query, .. } => query.page,
            _ => None,
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())?;
        let query = self.query();
        if !query.is_empty() {
            let joined = query
                .iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            write!(f, "?{}", joined)?;
        }
        Ok(())
    }
}
