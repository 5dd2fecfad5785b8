//! Seller page: the directory on the left, the selected seller's widgets on the right.

use super::super::frame::{render_bars, render_bound, widget_block};
use super::overview::render_kpi_card;
use super::{render_records, series_chart};
use crate::format::{format_brl, format_compact_brl, format_count, truncate};
use crate::insights::{group_categories, trend_line};
use crate::models::seller::{SellerDetails, SellerInsights};
use crate::state::FetchState;
use crate::ui::dashboard::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph, Wrap};

pub fn render_seller(f: &mut Frame, area: Rect, state: &DashboardState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Fill(1)])
        .split(area);
    render_directory(f, columns[0], state);

    let seller = &state.board.seller;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Percentage(30),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ])
        .split(columns[1]);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(rows[0]);
    render_bound(f, top[0], "SELLER", seller.details.state(), render_details);
    render_bound(f, top[1], "E-COMMERCE", seller.metrics.state(), |f, area, m| {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2); 2])
            .split(area);
        render_kpi_card(
            f,
            cards[0],
            "Customers",
            format_count(m.customers.total.round() as u64),
            Some(m.customers.growth),
        );
        render_kpi_card(
            f,
            cards[1],
            "Orders",
            format_count(m.orders.total.round() as u64),
            Some(m.orders.growth),
        );
    });
    render_bound(f, top[2], "PREDICTIVE", seller.insights.state(), render_insights);

    render_bound(
        f,
        rows[1],
        "SALES TREND",
        seller.sales_trend.state(),
        |f, area, months| {
            let categories: Vec<String> = months.iter().map(|m| m.month.clone()).collect();
            let revenue: Vec<f64> = months.iter().map(|m| m.monthly_revenue).collect();
            let trend = trend_line(&revenue);
            series_chart(
                f,
                area,
                &categories,
                &[
                    ("Revenue", revenue, Color::Cyan),
                    ("Trend", trend, Color::Yellow),
                ],
            );
        },
    );

    let lists = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(rows[2]);
    render_bound(
        f,
        lists[0],
        "TOP PRODUCTS",
        seller.top_products.state(),
        |f, area, rows| render_records(f, area, rows, None),
    );
    render_bound(
        f,
        lists[1],
        "RECENT ORDERS",
        seller.recent_orders.state(),
        |f, area, rows| render_records(f, area, rows, None),
    );

    let distributions = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(rows[3]);
    render_bound(
        f,
        distributions[0],
        "REVIEW SCORES",
        seller.reviews.state(),
        |f, area, buckets| {
            let entries: Vec<(String, f64)> = buckets
                .iter()
                .map(|b| ("★".repeat(usize::from(b.review_score)), b.count as f64))
                .collect();
            render_bars(f, area, &entries, Color::Yellow);
        },
    );
    render_bound(
        f,
        distributions[1],
        "CATEGORIES",
        seller.categories.state(),
        |f, area, categories| {
            let entries: Vec<(String, f64)> = group_categories(categories)
                .into_iter()
                .map(|(name, count)| (truncate(&name, 20), count as f64))
                .collect();
            render_bars(f, area, &entries, Color::Magenta);
        },
    );
}

fn render_directory(f: &mut Frame, area: Rect, state: &DashboardState) {
    let selection = state.board.selection();
    let title = format!("SELLERS ({})", selection.sellers().len());
    match selection.directory_state() {
        FetchState::Loaded(_) => {
            let selected = selection.selected();
            let visible = area.height.saturating_sub(2) as usize;
            let position = selected
                .as_ref()
                .and_then(|id| selection.sellers().iter().position(|s| s == id))
                .unwrap_or(0);
            let skip = position.saturating_sub(visible.saturating_sub(1));
            let items: Vec<ListItem> = selection
                .sellers()
                .iter()
                .skip(skip)
                .take(visible)
                .map(|id| {
                    if selected.as_deref() == Some(id.as_str()) {
                        ListItem::new(Line::from(Span::styled(
                            format!("> {}", id),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        )))
                    } else {
                        ListItem::new(format!("  {}", id))
                    }
                })
                .collect();
            f.render_widget(List::new(items).block(widget_block(&title)), area);
        }
        other => render_bound(f, area, &title, other, |_, _, _| {}),
    }
}

fn render_details(f: &mut Frame, area: Rect, details: &SellerDetails) {
    let optional = |value: Option<f64>, fmt: fn(f64) -> String| {
        value.map(fmt).unwrap_or_else(|| "-".to_string())
    };
    let lines = vec![
        Line::from(Span::styled(
            details.seller_id.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{}, {}", details.seller_city, details.seller_state)),
        Line::from(format!(
            "Revenue {} | Orders {} | Products {}",
            format_compact_brl(details.total_revenue),
            details.total_orders,
            details.distinct_products_sold
        )),
        Line::from(format!(
            "Review {} | On time {}",
            optional(details.average_review_score, |v| format!("{:.2}", v)),
            optional(details.on_time_delivery_rate, |v| format!("{:.1}%", v)),
        )),
        Line::from(format!(
            "First sale {}",
            details.first_sale_date.as_deref().unwrap_or("-")
        )),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_insights(f: &mut Frame, area: Rect, insights: &SellerInsights) {
    let lines = vec![
        Line::from(format!("Recency: {:.0} days", insights.recency)),
        Line::from(format!("Frequency: {:.2}", insights.average_frequency)),
        Line::from(format!(
            "Avg. value: {}",
            format_brl(insights.average_monetary_value)
        )),
        Line::from(Span::styled(
            format!("Churn rate: {:.1}%", insights.churn_rate),
            Style::default().fg(if insights.churn_rate > 50.0 {
                Color::Red
            } else {
                Color::Green
            }),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
