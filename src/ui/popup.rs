use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{BRAND_GOLD, POPUP_BORDER};

/// Bordered, centred popup sized to its content.
pub struct PopupDialog<'a> {
    title: String,
    lines: Vec<Line<'a>>,
    width: Option<u16>,
}

impl<'a> PopupDialog<'a> {
    pub fn new(title: impl Into<String>, lines: Vec<Line<'a>>) -> Self {
        Self {
            title: title.into(),
            lines,
            width: None,
        }
    }

    pub fn fixed_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let content_width = self.lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let width = self
            .width
            .unwrap_or_else(|| content_width.saturating_add(4).max(self.title.len() as u16 + 6));
        let height = (self.lines.len() as u16).saturating_add(2);
        let rect = centered_rect_by_size(area, width, height);

        frame.render_widget(Clear, rect);
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(BRAND_GOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        frame.render_widget(
            Paragraph::new(self.lines)
                .block(block)
                .wrap(Wrap { trim: false }),
            rect,
        );
    }
}
