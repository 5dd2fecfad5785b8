use crate::format::{format_brl, format_count};
use crate::models::{Column, TableRecord};
use serde::Deserialize;

/// `/api/v2/sellers/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SellerDetails {
    pub seller_id: String,
    pub seller_city: String,
    pub seller_state: String,
    #[serde(default)]
    pub first_sale_date: Option<String>,
    pub total_revenue: f64,
    pub total_orders: u64,
    #[serde(default)]
    pub distinct_products_sold: u64,
    #[serde(default)]
    pub average_review_score: Option<f64>,
    #[serde(default)]
    pub on_time_delivery_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricWithGrowth {
    pub total: f64,
    #[serde(default)]
    pub growth: f64,
}

/// `/api/sellers/{id}/ecommerce-metrics`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EcommerceMetrics {
    pub customers: MetricWithGrowth,
    pub orders: MetricWithGrowth,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlyRevenue {
    pub month: String,
    pub monthly_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductSales {
    pub product_id: String,
    #[serde(default)]
    pub category: Option<String>,
    pub sales_count: u64,
}

impl TableRecord for ProductSales {
    const COLUMNS: &'static [Column] = &[
        Column::new("product_id", "Product"),
        Column::new("category", "Category"),
        Column::new("sales_count", "Sales"),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.product_id.clone(),
            self.category.clone().unwrap_or_else(|| "N/A".to_string()),
            format_count(self.sales_count),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecentOrder {
    pub order_id: String,
    pub order_status: String,
    pub order_purchase_timestamp: String,
    pub total_value: f64,
}

impl TableRecord for RecentOrder {
    const COLUMNS: &'static [Column] = &[
        Column::new("order_id", "Order"),
        Column::new("order_status", "Status"),
        Column::new("order_purchase_timestamp", "Purchased"),
        Column::new("total_value", "Total"),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.order_id.clone(),
            self.order_status.clone(),
            self.order_purchase_timestamp.clone(),
            format_brl(self.total_value),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewBucket {
    pub review_score: u8,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// `/api/v2/sellers/{id}/predictive-insights`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SellerInsights {
    pub recency: f64,
    pub average_frequency: f64,
    pub average_monetary_value: f64,
    pub churn_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metrics_without_growth_default_to_zero() {
        let metrics: EcommerceMetrics = serde_json::from_value(json!({
            "customers": {"total": 310},
            "orders": {"total": 402, "growth": -4.5}
        }))
        .unwrap();
        assert_eq!(metrics.customers.growth, 0.0);
        assert_eq!(metrics.orders.growth, -4.5);
    }

    #[test]
    fn missing_category_renders_placeholder() {
        let product: ProductSales = serde_json::from_value(json!({
            "product_id": "p1",
            "category": null,
            "sales_count": 1200
        }))
        .unwrap();
        assert_eq!(product.cells(), vec!["p1", "N/A", "1,200"]);
    }
}
