//! Values derived on the client from loaded payloads.

use crate::consts::cli_consts::{limits, predictive};
use crate::models::predictive::{ChurnPrediction, FeatureImportance, ForecastPoint, SellerPerformance};
use crate::models::seller::CategoryCount;
use crate::models::{SortDirection, SortSpec};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::BTreeMap;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Least-squares line through `values` at x = 0, 1, 2..., rounded to cents.
///
/// A single point yields itself, and an empty series yields nothing.
pub fn trend_line(values: &[f64]) -> Vec<f64> {
    let n = values.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
    for (i, y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }
    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return values.iter().map(|v| round2(*v)).collect();
    }
    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    (0..values.len())
        .map(|i| round2(slope * i as f64 + intercept))
        .collect()
}

/// The first [`limits::TOP_CATEGORIES`] categories in server order, plus an
/// "Other" bucket holding the rest when it is non-empty.
pub fn group_categories(categories: &[CategoryCount]) -> Vec<(String, u64)> {
    let top = limits::TOP_CATEGORIES.min(categories.len());
    let mut grouped: Vec<(String, u64)> = categories[..top]
        .iter()
        .map(|c| (c.category.clone(), c.count))
        .collect();
    let other: u64 = categories[top..].iter().map(|c| c.count).sum();
    if other > 0 {
        grouped.push(("Other".to_string(), other));
    }
    grouped
}

/// `credit_card` -> `Credit Card`
pub fn prettify_label(raw: &str) -> String {
    raw.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// State code as shown on the region chart: `sp` -> `BR-SP`.
pub fn region_code(state: &str) -> String {
    format!("BR-{}", state.trim().to_uppercase())
}

/// Entries ordered by value, largest first; ties keep key order.
pub fn ranked(distribution: &BTreeMap<String, f64>) -> Vec<(&str, f64)> {
    let mut entries: Vec<(&str, f64)> = distribution
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    entries
}

/// Platform-level churn figures.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictiveSummary {
    pub high_risk_customers: usize,
    pub active_customers: usize,
    /// Percentage of active customers that are at risk.
    pub churn_rate: f64,
    /// Spend of the at-risk customers.
    pub affected_gmv: f64,
    /// Sum of every forecast point after the reference date.
    pub predicted_gmv: f64,
}

/// Not yet churned, but inactive for a while and rarely buying.
pub fn is_high_risk(p: &ChurnPrediction) -> bool {
    p.is_churn == 0
        && p.recency > predictive::HIGH_RISK_RECENCY_DAYS
        && p.frequency <= predictive::HIGH_RISK_MAX_FREQUENCY
}

fn forecast_date(ds: &str) -> Option<NaiveDate> {
    ds.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
}

pub fn summarize_predictions(
    predictions: &[ChurnPrediction],
    forecasts: &BTreeMap<String, Vec<ForecastPoint>>,
) -> PredictiveSummary {
    let active: Vec<&ChurnPrediction> = predictions.iter().filter(|p| p.is_churn == 0).collect();
    let high_risk: Vec<&ChurnPrediction> =
        active.iter().copied().filter(|p| is_high_risk(p)).collect();
    let churn_rate = if active.is_empty() {
        0.0
    } else {
        high_risk.len() as f64 / active.len() as f64 * 100.0
    };

    let reference = forecast_date(predictive::FORECAST_REFERENCE_DATE);
    let predicted_gmv: f64 = forecasts
        .values()
        .flatten()
        .filter(|f| match (forecast_date(&f.ds), reference) {
            (Some(date), Some(reference)) => date > reference,
            _ => false,
        })
        .map(|f| f.yhat)
        .sum();

    PredictiveSummary {
        high_risk_customers: high_risk.len(),
        active_customers: active.len(),
        churn_rate,
        affected_gmv: high_risk.iter().map(|p| p.monetary).sum(),
        predicted_gmv,
    }
}

/// One date of the combined forecast across all categories.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedForecast {
    pub ds: String,
    pub yhat: f64,
    pub yhat_lower: f64,
    pub yhat_upper: f64,
}

/// Sums the category forecasts per date, ordered by date.
pub fn aggregate_forecast(
    forecasts: &BTreeMap<String, Vec<ForecastPoint>>,
) -> Vec<AggregatedForecast> {
    let mut by_date: BTreeMap<&str, AggregatedForecast> = BTreeMap::new();
    for point in forecasts.values().flatten() {
        let day = point.ds.get(..10).unwrap_or(&point.ds);
        let entry = by_date.entry(day).or_insert_with(|| AggregatedForecast {
            ds: day.to_string(),
            yhat: 0.0,
            yhat_lower: 0.0,
            yhat_upper: 0.0,
        });
        entry.yhat += point.yhat;
        entry.yhat_lower += point.yhat_lower;
        entry.yhat_upper += point.yhat_upper;
    }
    by_date.into_values().collect()
}

/// Feature importances, most important first.
pub fn churn_drivers(features: &[FeatureImportance]) -> Vec<FeatureImportance> {
    let mut drivers = features.to_vec();
    drivers.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(Ordering::Equal)
    });
    drivers
}

/// Initial order of the seller performance table.
pub fn default_performance_sort() -> SortSpec {
    SortSpec::descending("seller_churn_rate")
}

/// Next order of the seller performance table when `field` is chosen.
/// A new column starts descending; the current one flips.
pub fn next_performance_sort(current: &SortSpec, field: &str) -> SortSpec {
    if current.key == field {
        SortSpec::new(field, current.direction.flipped())
    } else {
        SortSpec::descending(field)
    }
}

/// Sorts the seller performance rows locally. Unknown keys keep the input order.
pub fn sort_seller_performance(rows: &[SellerPerformance], sort: &SortSpec) -> Vec<SellerPerformance> {
    let mut sorted = rows.to_vec();
    let compare = |a: &SellerPerformance, b: &SellerPerformance| -> Ordering {
        match sort.key.as_str() {
            "seller_id" => a.seller_id.cmp(&b.seller_id),
            "total_customers" => a.total_customers.cmp(&b.total_customers),
            "high_risk_customers" => a.high_risk_customers.cmp(&b.high_risk_customers),
            "seller_churn_rate" => a
                .seller_churn_rate
                .partial_cmp(&b.seller_churn_rate)
                .unwrap_or(Ordering::Equal),
            "affected_gmv" => a
                .affected_gmv
                .partial_cmp(&b.affected_gmv)
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    };
    sorted.sort_by(|a, b| match sort.direction {
        SortDirection::Ascending => compare(a, b),
        SortDirection::Descending => compare(b, a),
    });
    sorted
}
