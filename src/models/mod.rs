//! Response payloads of the analytics API.
//!
//! Every widget decodes the JSON body into one of these types. A body that
//! does not match the expected shape is a decode error for that widget.

pub mod platform;
pub mod predictive;
pub mod query;
pub mod seller;
pub mod tables;

pub use query::{SortDirection, SortSpec};

use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Opaque seller identifier as issued by the API.
pub type SellerId = String;

/// A column of a tabular record. `key` is the field name the API sorts by.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: true,
        }
    }

    /// A column the server cannot order by.
    pub const fn fixed(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: false,
        }
    }
}

/// A row type that can be shown in a table.
pub trait TableRecord: DeserializeOwned + Clone + Send + Sync + 'static {
    const COLUMNS: &'static [Column];

    /// Display text for each of [`Self::COLUMNS`], in order.
    fn cells(&self) -> Vec<String>;

    fn can_sort_by(key: &str) -> bool {
        Self::COLUMNS.iter().any(|c| c.key == key && c.sortable)
    }

    fn sort_keys() -> Vec<&'static str> {
        Self::COLUMNS
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.key)
            .collect()
    }
}

/// Body of a server-paginated endpoint: one window of rows and the total row count.
pub trait PagePayload: DeserializeOwned + Clone + Send + Sync + 'static {
    type Row: TableRecord;

    fn rows(&self) -> &[Self::Row];
    fn total_count(&self) -> u64;
}

/// `{ "data": [...], "totalCount": n }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<R> {
    pub data: Vec<R>,
    #[serde(rename = "totalCount", default)]
    pub total_count: u64,
}

impl<R: TableRecord> PagePayload for Page<R> {
    type Row = R;

    fn rows(&self) -> &[R] {
        &self.data
    }

    fn total_count(&self) -> u64 {
        self.total_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tables::{OrderRow, SellerRow};
    use serde_json::json;

    #[test]
    fn page_reads_total_count() {
        let page: Page<OrderRow> = serde_json::from_value(json!({
            "data": [{
                "order_id": "o1",
                "customer_unique_id": "c1",
                "order_status": "delivered",
                "order_purchase_timestamp": "2018-08-29T14:18:28",
                "total_value": 120.5
            }],
            "totalCount": 42
        }))
        .unwrap();
        assert_eq!(page.rows().len(), 1);
        assert_eq!(page.total_count(), 42);
    }

    #[test]
    fn page_without_rows_is_valid() {
        let page: Page<OrderRow> =
            serde_json::from_value(json!({"data": [], "totalCount": 0})).unwrap();
        assert!(page.rows().is_empty());
    }

    #[test]
    fn column_lookup() {
        assert!(OrderRow::can_sort_by("total_value"));
        assert!(!OrderRow::can_sort_by("revenue"));
    }

    #[test]
    fn only_server_sortable_columns_accept_a_sort() {
        assert!(SellerRow::COLUMNS.iter().any(|c| c.key == "seller_city"));
        assert!(!SellerRow::can_sort_by("seller_city"));
        assert_eq!(
            SellerRow::sort_keys(),
            ["total_revenue", "unique_order_count"]
        );
        assert!(OrderRow::can_sort_by("customer_unique_id"));
    }
}
