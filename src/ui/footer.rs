use crate::ui::pages::Page;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    fn hints(page: Page, searching: bool, editing: bool) -> &'static str {
        if searching {
            return " Type to filter │ Enter: Keep │ Esc: Clear";
        }
        if editing {
            return " Tab: Next field │ Enter: Submit │ Esc: Leave form";
        }
        match page {
            Page::Users => {
                " 1-8: Go │ /: Search │ e/c: Sort │ [ ]: Page │ Enter: Open │ r: Refresh │ q: Quit"
            }
            Page::UserDetail => " Tab: Tab │ f: Fulfil │ Esc: Back │ r: Refresh │ q: Quit",
            Page::Products => {
                " 1-8: Go │ /: Search │ n: New │ e: Edit │ d: Delete │ [ ]: Page │ r: Refresh │ q: Quit"
            }
            Page::Pricing => " 1-8: Go │ i: Edit price │ Tab: History metal │ r: Refresh │ q: Quit",
            Page::Payments => " 1-8: Go │ i: Refund form │ m: More │ r: Refresh │ q: Quit",
            Page::Orders => " 1-8: Go │ Tab: Stream │ m: More │ f: Fulfil │ r: Refresh │ q: Quit",
            Page::Referrals => " 1-8: Go │ Tab: Metal │ e: Edit │ r: Refresh │ q: Quit",
            Page::Schemes => {
                " 1-8: Go │ Enter: Open │ n: New │ e: Edit │ d: Delete │ [ ]: Page │ q: Quit"
            }
            Page::SchemeDetail => " Tab: Terms │ e: Edit │ Esc: Back │ r: Refresh │ q: Quit",
            Page::Dashboard => " 1-8: Go │ r: Refresh │ Ctrl+Q: Quit",
        }
    }

    pub fn widget(&self, area: Rect, page: Page, searching: bool, editing: bool) -> Paragraph<'static> {
        let hints = Self::hints(page, searching, editing);
        let version = format!("v{} ", VERSION);

        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
