//! Shared rendering of a data-bound widget.
//!
//! Idle draws nothing, loading draws a placeholder, an error draws its message
//! in red, and loaded data is handed to the widget's own renderer.

use crate::state::FetchState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph, Wrap};

pub fn widget_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

pub fn render_bound<T>(
    f: &mut Frame,
    area: Rect,
    title: &str,
    state: &FetchState<T>,
    content: impl FnOnce(&mut Frame, Rect, &T),
) {
    let block = widget_block(title);
    match state {
        FetchState::Idle => {}
        FetchState::Loading => {
            let loading = Paragraph::new("Loading...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(loading, area);
        }
        FetchState::Error(message) => {
            let error = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(error, area);
        }
        FetchState::Loaded(data) => {
            let inner = block.inner(area);
            f.render_widget(block, area);
            content(f, inner, data);
        }
    }
}

/// Horizontal bars, one per `(label, value)`, in the given order.
pub fn render_bars(f: &mut Frame, area: Rect, entries: &[(String, f64)], color: Color) {
    if entries.is_empty() {
        f.render_widget(
            Paragraph::new("No data").style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }
    let bars: Vec<Bar> = entries
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .value(value.max(0.0).round() as u64)
                .label(Line::from(label.clone()))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();
    let chart = BarChart::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}
