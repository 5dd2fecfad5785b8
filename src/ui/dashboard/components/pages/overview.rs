//! Overview page: platform KPIs, revenue trend, distributions and leaderboards.

use super::super::frame::{render_bars, render_bound};
use super::{render_records, series_chart};
use crate::format::{format_compact_brl, format_count, format_growth};
use crate::insights::{prettify_label, ranked, region_code, trend_line};
use crate::models::platform::{Distribution, PlatformKpis};
use crate::ui::dashboard::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_overview(f: &mut Frame, area: Rect, state: &DashboardState) {
    let overview = &state.board.overview;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Percentage(35),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ])
        .split(area);

    render_bound(f, rows[0], "PLATFORM KPIs", overview.kpis.state(), render_kpis);

    render_bound(
        f,
        rows[1],
        "REVENUE TREND",
        overview.revenue_trend.state(),
        |f, area, trend| {
            let revenue = trend.revenue();
            series_chart(
                f,
                area,
                &trend.categories,
                &[
                    ("Revenue", revenue.to_vec(), Color::Cyan),
                    ("Trend", trend_line(revenue), Color::Yellow),
                ],
            );
        },
    );

    let distributions = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[2]);
    render_bound(
        f,
        distributions[0],
        "ORDER STATUS",
        overview.order_status.state(),
        |f, area, d| render_bars(f, area, &labelled(d, |k| k.to_string()), Color::Cyan),
    );
    render_bound(
        f,
        distributions[1],
        "PAYMENT METHODS",
        overview.payment_methods.state(),
        |f, area, d| render_bars(f, area, &labelled(d, prettify_label), Color::Magenta),
    );
    render_bound(
        f,
        distributions[2],
        "SALES BY REGION",
        overview.sales_by_region.state(),
        |f, area, d| render_bars(f, area, &labelled(d, region_code), Color::Green),
    );

    let leaders = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[3]);
    render_bound(
        f,
        leaders[0],
        "TOP PRODUCTS",
        overview.top_products.state(),
        |f, area, rows| render_records(f, area, rows, None),
    );
    render_bound(
        f,
        leaders[1],
        "TOP SELLERS BY REVENUE",
        overview.top_sellers_by_revenue.state(),
        |f, area, rows| render_records(f, area, rows, None),
    );
    render_bound(
        f,
        leaders[2],
        "TOP SELLERS BY VOLUME",
        overview.top_sellers_by_volume.state(),
        |f, area, page| render_records(f, area, &page.data, None),
    );
}

/// Largest first, with display labels.
fn labelled(distribution: &Distribution, label: impl Fn(&str) -> String) -> Vec<(String, f64)> {
    ranked(distribution)
        .into_iter()
        .map(|(key, value)| (label(key), value))
        .collect()
}

fn render_kpis(f: &mut Frame, area: Rect, kpis: &PlatformKpis) {
    let cards = [
        ("Revenue", format_compact_brl(kpis.total_revenue), kpis.revenue_growth),
        ("Orders", format_count(kpis.total_orders), kpis.orders_growth),
        ("Customers", format_count(kpis.total_customers), kpis.customers_growth),
        ("Sellers", format_count(kpis.total_sellers), kpis.sellers_growth),
    ];
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);
    for ((label, value, growth), chunk) in cards.into_iter().zip(chunks.iter()) {
        render_kpi_card(f, *chunk, label, value, Some(growth));
    }
}

/// One KPI: label, big value and an optional growth badge.
pub fn render_kpi_card(f: &mut Frame, area: Rect, label: &str, value: String, growth: Option<f64>) {
    let mut lines = vec![
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(growth) = growth {
        let color = if growth > 0.0 {
            Color::Green
        } else {
            Color::Red
        };
        lines.push(Line::from(Span::styled(
            format_growth(growth),
            Style::default().fg(color),
        )));
    }
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
        area,
    );
}
