//! Dashboard info panel component
//!
//! Renders connection and widget status

use super::super::state::DashboardState;
use super::super::utils::phase_color;
use crate::environment::Environment;

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render info panel.
pub fn render_info_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut info_lines = Vec::new();

    let env_color = match state.environment {
        Environment::Local => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
    };
    info_lines.push(Line::from(vec![Span::styled(
        format!("API: {}", state.environment.api_url()),
        Style::default().fg(env_color),
    )]));

    let seller_text = match state.board.selection().selected() {
        Some(id) => format!("Seller: {}", id),
        None => "Seller: none".to_string(),
    };
    info_lines.push(Line::from(vec![Span::styled(
        seller_text,
        Style::default().fg(Color::LightBlue),
    )]));

    let uptime = state.start_time.elapsed().as_secs();
    let uptime_string = if uptime >= 3600 {
        format!(
            "Uptime: {}h {}m {}s",
            uptime / 3600,
            (uptime % 3600) / 60,
            uptime % 60
        )
    } else {
        format!("Uptime: {}m {}s", uptime / 60, uptime % 60)
    };
    info_lines.push(Line::from(vec![Span::styled(
        uptime_string,
        Style::default().fg(Color::LightGreen),
    )]));

    let phases: Vec<Span> = state
        .board
        .phase_counts()
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(phase, count)| {
            Span::styled(
                format!("{} {}  ", phase, count),
                Style::default().fg(phase_color(phase)),
            )
        })
        .collect();
    info_lines.push(Line::from(phases));

    info_lines.push(Line::from(vec![Span::styled(
        format!(
            "Fetches: {} ok, {} failed, {} stale",
            state.tally.loaded, state.tally.failed, state.tally.stale
        ),
        Style::default().fg(Color::LightYellow),
    )]));

    let info_block = Block::default()
        .title("STATUS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}
