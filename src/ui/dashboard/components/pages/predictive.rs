//! Predictive page: churn summary, forecast, churn drivers and the locally
//! sorted seller performance table.

use super::super::frame::{render_bars, render_bound};
use super::overview::render_kpi_card;
use super::{render_records, series_chart};
use crate::format::{format_compact_brl, format_count};
use crate::insights::{aggregate_forecast, churn_drivers, prettify_label, summarize_predictions};
use crate::ui::dashboard::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::Color;

pub fn render_predictive(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let board = &state.board;
    render_bound(
        f,
        area,
        "PREDICTIVE INSIGHTS",
        board.predictive.state(),
        |f, area, insights| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(4),
                    Constraint::Percentage(40),
                    Constraint::Fill(1),
                ])
                .split(area);

            let summary = summarize_predictions(
                &insights.churn_analysis.predictions,
                &insights.sales_forecast,
            );
            let cards = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 4); 4])
                .split(rows[0]);
            render_kpi_card(
                f,
                cards[0],
                "High-risk customers",
                format_count(summary.high_risk_customers as u64),
                None,
            );
            render_kpi_card(
                f,
                cards[1],
                "Churn rate",
                format!("{:.1}%", summary.churn_rate),
                None,
            );
            render_kpi_card(
                f,
                cards[2],
                "Affected GMV",
                format_compact_brl(summary.affected_gmv),
                None,
            );
            render_kpi_card(
                f,
                cards[3],
                "Predicted GMV",
                format_compact_brl(summary.predicted_gmv),
                None,
            );

            let middle = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(65), Constraint::Fill(1)])
                .split(rows[1]);
            let forecast = aggregate_forecast(&insights.sales_forecast);
            let dates: Vec<String> = forecast.iter().map(|p| p.ds.clone()).collect();
            series_chart(
                f,
                middle[0],
                &dates,
                &[
                    (
                        "Forecast",
                        forecast.iter().map(|p| p.yhat).collect(),
                        Color::Cyan,
                    ),
                    (
                        "Lower",
                        forecast.iter().map(|p| p.yhat_lower).collect(),
                        Color::DarkGray,
                    ),
                    (
                        "Upper",
                        forecast.iter().map(|p| p.yhat_upper).collect(),
                        Color::DarkGray,
                    ),
                ],
            );
            // Importances are fractions; scale them so the bars have resolution.
            let drivers: Vec<(String, f64)> =
                churn_drivers(&insights.churn_analysis.feature_importance)
                    .into_iter()
                    .map(|d| (prettify_label(&d.feature), d.importance * 100.0))
                    .collect();
            render_bars(f, middle[1], &drivers, Color::Red);

            let performance = board.seller_performance();
            render_records(f, rows[2], &performance, Some(board.performance_sort()));
        },
    );
}
