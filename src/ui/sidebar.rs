use crate::ui::pages::Page;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BRAND_GOLD, GLOBAL_BORDER, HEADER_TEXT, MUTED};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Numbered navigation entries; the current screen is highlighted.
pub fn widget(current: Page) -> Paragraph<'static> {
    let active = current.nav_entry();
    let lines: Vec<Line> = Page::NAV
        .iter()
        .enumerate()
        .map(|(index, page)| {
            let selected = *page == active;
            let number_style = Style::default().fg(MUTED);
            let title_style = if selected {
                Style::default()
                    .fg(BRAND_GOLD)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            let marker = if selected { "▌" } else { " " };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(BRAND_GOLD)),
                Span::styled(format!("{} ", index + 1), number_style),
                Span::styled(page.title(), title_style),
            ])
        })
        .collect();

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
