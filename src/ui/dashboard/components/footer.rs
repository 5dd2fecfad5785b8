//! Dashboard footer component
//!
//! Renders the key hints for the page on screen

use crate::widgets::Page;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn hints(page: Page) -> &'static str {
    match page {
        Page::Seller => "[Q] Quit | [Tab] Page | [↑/↓] Seller",
        Page::Orders | Page::Products | Page::Sellers => {
            "[Q] Quit | [Tab] Page | [←/→] Page | [Home/End] First/Last | [1-9] Sort"
        }
        Page::Sentiment => "[Q] Quit | [Tab] Page | [←/→] Page | [Home/End] First/Last",
        Page::Predictive => "[Q] Quit | [Tab] Page | [1-5] Sort sellers",
        Page::Overview => "[Q] Quit | [Tab] Page",
    }
}

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, page: Page) {
    let footer = Paragraph::new(hints(page))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
