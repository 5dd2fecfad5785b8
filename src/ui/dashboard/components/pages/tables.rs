//! Pages built around one server-paginated table.

use super::super::frame::{render_bars, render_bound};
use super::render_records;
use crate::format::format_count;
use crate::insights::prettify_label;
use crate::models::PagePayload;
use crate::state::PaginatedTable;
use crate::ui::dashboard::state::DashboardState;
use crate::widgets::Page;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Paragraph;

pub fn render_table_page(f: &mut Frame, area: Rect, state: &DashboardState) {
    let tables = &state.board.tables;
    match state.page {
        Page::Orders => render_paginated(f, area, "ORDERS", &tables.orders),
        Page::Products => render_paginated(f, area, "PRODUCTS", &tables.products),
        Page::Sellers => render_paginated(f, area, "SELLERS", &tables.sellers),
        _ => {}
    }
}

pub fn render_sentiment(f: &mut Frame, area: Rect, state: &DashboardState) {
    let reviews = &state.board.tables.reviews;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Fill(1)])
        .split(area);
    render_bound(
        f,
        columns[0],
        "SENTIMENT",
        reviews.state(),
        |f, area, analysis| {
            let entries: Vec<(String, f64)> = analysis
                .distribution
                .iter()
                .map(|(label, count)| (prettify_label(label), *count as f64))
                .collect();
            render_bars(f, area, &entries, Color::LightBlue);
        },
    );
    render_paginated(f, columns[1], "REVIEWS", reviews);
}

/// The current window of `table` with a pager line underneath.
fn render_paginated<P: PagePayload>(
    f: &mut Frame,
    area: Rect,
    title: &str,
    table: &PaginatedTable<P>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1)])
        .split(area);

    let sort = if table.config().kind.sortable() {
        table.sort()
    } else {
        None
    };
    render_bound(f, chunks[0], title, table.state(), |f, area, _| {
        render_records(f, area, table.rows(), sort);
    });

    let mut pager = format!(
        "Page {} of {} | {} rows",
        table.current_page(),
        table.total_pages().max(1),
        format_count(table.total_count())
    );
    if table.has_multiple_pages() {
        pager.push_str(" | [←/→] Page [Home/End] First/Last");
    }
    f.render_widget(
        Paragraph::new(pager)
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}
