//! Page bodies, one renderer per dashboard page.

pub mod overview;
pub mod predictive;
pub mod seller;
pub mod tables;

use crate::format::format_compact_brl;
use crate::models::{SortSpec, TableRecord};
use crate::ui::dashboard::state::DashboardState;
use crate::ui::dashboard::utils::status_color;
use crate::widgets::Page;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table};

pub fn render_page(f: &mut Frame, area: Rect, state: &DashboardState) {
    match state.page {
        Page::Overview => overview::render_overview(f, area, state),
        Page::Seller => seller::render_seller(f, area, state),
        Page::Orders | Page::Products | Page::Sellers => tables::render_table_page(f, area, state),
        Page::Sentiment => tables::render_sentiment(f, area, state),
        Page::Predictive => predictive::render_predictive(f, area, state),
    }
}

/// Rows of any record type. With a sort, headers carry their key number and
/// the sorted column an arrow.
pub fn render_records<R: TableRecord>(
    f: &mut Frame,
    area: Rect,
    rows: &[R],
    sort: Option<&SortSpec>,
) {
    if rows.is_empty() {
        f.render_widget(
            Paragraph::new("No rows").style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }
    let header = Row::new(R::COLUMNS.iter().enumerate().map(|(i, column)| {
        let mut label = column.label.to_string();
        if let Some(sort) = sort.filter(|_| column.sortable) {
            label = format!("{} {}", i + 1, label);
            if sort.key == column.key {
                label = format!("{} {}", label, sort.direction.arrow());
            }
        }
        Cell::from(label)
    }))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let status_column = R::COLUMNS.iter().position(|c| c.key == "order_status");
    let body = rows.iter().map(|record| {
        Row::new(record.cells().into_iter().enumerate().map(|(i, text)| {
            if Some(i) == status_column {
                let color = status_color(&text);
                Cell::from(Span::styled(text, Style::default().fg(color)))
            } else {
                Cell::from(text)
            }
        }))
    });

    let widths = vec![Constraint::Fill(1); R::COLUMNS.len()];
    f.render_widget(Table::new(body, widths).header(header), area);
}

/// Line chart of one or more series sharing the x categories.
pub fn series_chart(
    f: &mut Frame,
    area: Rect,
    categories: &[String],
    series: &[(&str, Vec<f64>, Color)],
) {
    let points: Vec<Vec<(f64, f64)>> = series
        .iter()
        .map(|(_, values, _)| {
            values
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v))
                .collect()
        })
        .collect();
    let len = series.iter().map(|(_, v, _)| v.len()).max().unwrap_or(0);
    if len == 0 {
        f.render_widget(
            Paragraph::new("No data").style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }
    let max = series
        .iter()
        .flat_map(|(_, v, _)| v.iter().copied())
        .fold(0.0_f64, f64::max);
    let top = if max > 0.0 { max * 1.1 } else { 1.0 };

    let datasets: Vec<Dataset> = series
        .iter()
        .zip(points.iter())
        .map(|((name, _, color), data)| {
            Dataset::default()
                .name(name.to_string())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(data)
        })
        .collect();

    let last = len.saturating_sub(1);
    let x_labels: Vec<String> = [0, last / 2, last]
        .iter()
        .map(|i| categories.get(*i).cloned().unwrap_or_default())
        .collect();

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, last.max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, top])
                .labels(vec![format_compact_brl(0.0), format_compact_brl(top)]),
        );
    f.render_widget(chart, area);
}
