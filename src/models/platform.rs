use crate::format::format_brl;
use crate::models::{Column, TableRecord};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Label to value, as returned by the distribution endpoints.
pub type Distribution = BTreeMap<String, f64>;

/// `/api/platform/kpis`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlatformKpis {
    pub total_revenue: f64,
    pub total_orders: u64,
    pub total_customers: u64,
    pub total_sellers: u64,
    #[serde(default)]
    pub revenue_growth: f64,
    #[serde(default)]
    pub orders_growth: f64,
    #[serde(default)]
    pub customers_growth: f64,
    #[serde(default)]
    pub sellers_growth: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub name: String,
    pub data: Vec<f64>,
}

/// `/api/platform/revenue-trend`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RevenueTrend {
    pub series: Vec<Series>,
    pub categories: Vec<String>,
}

impl RevenueTrend {
    /// Values of the first series, empty when the server sent none.
    pub fn revenue(&self) -> &[f64] {
        self.series.first().map(|s| s.data.as_slice()).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopSellerRevenue {
    pub seller_id: String,
    pub total_revenue: f64,
    pub seller_city: String,
    pub seller_state: String,
}

impl TableRecord for TopSellerRevenue {
    const COLUMNS: &'static [Column] = &[
        Column::new("seller_id", "Seller"),
        Column::new("seller_city", "City"),
        Column::new("seller_state", "State"),
        Column::new("total_revenue", "Revenue"),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.seller_id.clone(),
            self.seller_city.clone(),
            self.seller_state.clone(),
            format_brl(self.total_revenue),
        ]
    }
}
