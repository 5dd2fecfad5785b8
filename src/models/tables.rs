//! Rows of the server-paginated tables.

use crate::format::{format_brl, format_count, truncate};
use crate::models::{Column, Page, PagePayload, TableRecord};
use serde::Deserialize;
use std::collections::BTreeMap;

pub use crate::models::seller::ProductSales as ProductRow;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderRow {
    pub order_id: String,
    pub customer_unique_id: String,
    pub order_status: String,
    pub order_purchase_timestamp: String,
    pub total_value: f64,
}

impl TableRecord for OrderRow {
    const COLUMNS: &'static [Column] = &[
        Column::new("order_id", "Order ID"),
        Column::new("customer_unique_id", "Customer ID"),
        Column::new("order_status", "Status"),
        Column::new("order_purchase_timestamp", "Purchase Date"),
        Column::new("total_value", "Total Value"),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.order_id.clone(),
            self.customer_unique_id.clone(),
            self.order_status.clone(),
            self.order_purchase_timestamp.clone(),
            format_brl(self.total_value),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SellerRow {
    pub seller_id: String,
    pub seller_city: String,
    pub seller_state: String,
    pub total_revenue: f64,
    #[serde(alias = "order_count")]
    pub unique_order_count: u64,
}

impl TableRecord for SellerRow {
    const COLUMNS: &'static [Column] = &[
        Column::fixed("seller_id", "Seller ID"),
        Column::fixed("seller_city", "City"),
        Column::fixed("seller_state", "State"),
        Column::new("total_revenue", "Total Revenue"),
        Column::new("unique_order_count", "Orders"),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.seller_id.clone(),
            self.seller_city.clone(),
            self.seller_state.clone(),
            format_brl(self.total_revenue),
            format_count(self.unique_order_count),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewRow {
    pub review_id: String,
    pub review_score: u8,
    #[serde(default)]
    pub review_comment_message: Option<String>,
    pub sentiment_label: String,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub seller_id: Option<String>,
    pub review_creation_date: String,
}

impl TableRecord for ReviewRow {
    const COLUMNS: &'static [Column] = &[
        Column::new("review_creation_date", "Date"),
        Column::new("review_score", "Score"),
        Column::new("sentiment_label", "Sentiment"),
        Column::new("sentiment_score", "Confidence"),
        Column::new("review_comment_message", "Comment"),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.review_creation_date.clone(),
            "★".repeat(self.review_score.min(5) as usize),
            self.sentiment_label.clone(),
            self.sentiment_score
                .map(|s| format!("{:.2}", s))
                .unwrap_or_else(|| "-".to_string()),
            truncate(self.review_comment_message.as_deref().unwrap_or(""), 80),
        ]
    }
}

/// `/api/sentiment-analysis`: label counts plus one page of classified reviews.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SentimentAnalysis {
    #[serde(default)]
    pub distribution: BTreeMap<String, u64>,
    pub reviews: Page<ReviewRow>,
}

impl PagePayload for SentimentAnalysis {
    type Row = ReviewRow;

    fn rows(&self) -> &[ReviewRow] {
        &self.reviews.data
    }

    fn total_count(&self) -> u64 {
        self.reviews.total_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sentiment_payload_pages_over_reviews() {
        let payload: SentimentAnalysis = serde_json::from_value(json!({
            "distribution": {"positive": 12, "neutral": 3, "negative": 5, "no_comment": 30},
            "reviews": {
                "data": [{
                    "review_id": "r1",
                    "review_score": 4,
                    "review_comment_message": "chegou antes do prazo",
                    "sentiment_label": "positive",
                    "sentiment_score": 0.91,
                    "seller_id": "s1",
                    "review_creation_date": "2018-03-01"
                }],
                "totalCount": 50
            }
        }))
        .unwrap();
        assert_eq!(payload.total_count(), 50);
        assert_eq!(payload.rows()[0].cells()[1], "★★★★");
        assert_eq!(payload.distribution["no_comment"], 30);
    }

    #[test]
    fn review_without_score_or_comment() {
        let review: ReviewRow = serde_json::from_value(json!({
            "review_id": "r2",
            "review_score": 1,
            "review_comment_message": null,
            "sentiment_label": "no_comment",
            "sentiment_score": null,
            "review_creation_date": "2018-03-02"
        }))
        .unwrap();
        let cells = review.cells();
        assert_eq!(cells[3], "-");
        assert_eq!(cells[4], "");
    }

    #[test]
    fn sellers_page_decodes_backend_shape() {
        let page: Page<SellerRow> = serde_json::from_value(json!({
            "data": [{
                "seller_id": "4869f7a5dfa277a7dca6462dcf3b52b2",
                "seller_city": "guariba",
                "seller_state": "SP",
                "total_revenue": 229472.63,
                "unique_order_count": 1132
            }],
            "totalCount": 3095
        }))
        .unwrap();
        assert_eq!(page.total_count(), 3095);
        let cells = page.rows()[0].cells();
        assert_eq!(cells[3], "R$ 229.472,63");
        assert_eq!(cells[4], "1,132");
    }
}
