use crate::format::{format_brl, format_count};
use crate::models::{Column, TableRecord};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChurnPrediction {
    pub customer_unique_id: String,
    #[serde(rename = "Recency")]
    pub recency: f64,
    #[serde(rename = "Frequency")]
    pub frequency: f64,
    #[serde(rename = "Monetary")]
    pub monetary: f64,
    #[serde(rename = "Purchase_Diversity", default)]
    pub purchase_diversity: f64,
    pub is_churn: u8,
    #[serde(default)]
    pub churn_probability: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureImportance {
    #[serde(rename = "Feature")]
    pub feature: String,
    #[serde(rename = "Importance")]
    pub importance: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChurnAnalysis {
    pub predictions: Vec<ChurnPrediction>,
    #[serde(default)]
    pub feature_importance: Vec<FeatureImportance>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastPoint {
    pub ds: String,
    pub yhat: f64,
    pub yhat_lower: f64,
    pub yhat_upper: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SellerPerformance {
    pub seller_id: String,
    pub total_customers: u64,
    pub high_risk_customers: u64,
    pub seller_churn_rate: f64,
    pub affected_gmv: f64,
}

impl TableRecord for SellerPerformance {
    const COLUMNS: &'static [Column] = &[
        Column::new("seller_id", "Seller ID"),
        Column::new("total_customers", "Customers"),
        Column::new("high_risk_customers", "High Risk"),
        Column::new("seller_churn_rate", "Churn Rate"),
        Column::new("affected_gmv", "Affected GMV"),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.seller_id.clone(),
            format_count(self.total_customers),
            format_count(self.high_risk_customers),
            format!("{:.2}%", self.seller_churn_rate),
            format_brl(self.affected_gmv),
        ]
    }
}

/// `/api/platform/predictive-insights`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlatformPredictive {
    pub churn_analysis: ChurnAnalysis,
    /// Forecast series keyed by product category.
    #[serde(default)]
    pub sales_forecast: BTreeMap<String, Vec<ForecastPoint>>,
    #[serde(default)]
    pub seller_performance: Vec<SellerPerformance>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_capitalised_model_fields() {
        let payload: PlatformPredictive = serde_json::from_value(json!({
            "churn_analysis": {
                "predictions": [{
                    "customer_unique_id": "c1",
                    "Recency": 120.0,
                    "Frequency": 1,
                    "Monetary": 89.9,
                    "Purchase_Diversity": 1,
                    "is_churn": 0,
                    "churn_probability": 0.42
                }],
                "feature_importance": [{"Feature": "Recency", "Importance": 0.61}]
            },
            "sales_forecast": {
                "bed_bath_table": [{"ds": "2018-09-02", "yhat": 10.0, "yhat_lower": 8.0, "yhat_upper": 12.0}]
            },
            "seller_performance": []
        }))
        .unwrap();
        assert_eq!(payload.churn_analysis.predictions[0].recency, 120.0);
        assert_eq!(payload.churn_analysis.feature_importance[0].feature, "Recency");
        assert_eq!(payload.sales_forecast["bed_bath_table"].len(), 1);
    }
}
