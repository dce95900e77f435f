use crate::ui::theme::{
    BRAND_GOLD, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_WARN,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// What the header shows about the session.
pub struct HeaderInfo<'a> {
    pub page_title: &'a str,
    pub api_url: &'a str,
    pub email: Option<&'a str>,
    pub syncing: bool,
    pub session_expired: bool,
}

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, info: HeaderInfo<'_>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let marker_color = if info.session_expired {
            STATUS_ERROR
        } else if info.syncing {
            STATUS_WARN
        } else {
            STATUS_OK
        };
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Bullion Admin",
                Style::default().fg(BRAND_GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(info.page_title.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("●", Style::default().fg(marker_color)),
            Span::styled(format!(" {}", info.api_url), text_style),
        ];
        if let Some(email) = info.email {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(email.to_string(), text_style));
        }
        if info.syncing {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("syncing…", Style::default().fg(STATUS_WARN)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
