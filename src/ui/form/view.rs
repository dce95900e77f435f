use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::state::{FieldInput, FormDialogState};
use crate::ui::popup::PopupDialog;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BRAND_GOLD, HEADER_TEXT, MUTED, STATUS_ERROR};
use crate::ui::widgets;

const LABEL_WIDTH: usize = 24;

fn field_lines(state: &FormDialogState, active: bool) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = state
        .fields()
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let focused = active && index == state.focused();
            let value = match &field.input {
                FieldInput::Text => {
                    let cursor = if focused { "█" } else { "" };
                    format!("{}{cursor}", field.value)
                }
                FieldInput::Toggle if field.is_on() => "[x]".to_string(),
                FieldInput::Toggle => "[ ]".to_string(),
                FieldInput::Choice(_) => format!("‹ {} ›", field.value),
            };
            let marker = if focused { "› " } else { "  " };
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(BRAND_GOLD)),
                Span::styled(
                    format!("{:<LABEL_WIDTH$}", field.label),
                    Style::default().fg(MUTED),
                ),
                Span::styled(value, Style::default().fg(HEADER_TEXT)),
            ]);
            if focused {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect();

    lines.push(Line::from(""));
    if let Some(error) = state.error() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    let hint = if state.is_submitting() {
        Span::styled(
            "Submitting…",
            Style::default().fg(BRAND_GOLD).add_modifier(Modifier::BOLD),
        )
    } else if active {
        Span::styled(
            "Tab/↑↓: Field  Space: Toggle  Enter: Submit  Esc: Leave",
            Style::default().fg(MUTED),
        )
    } else {
        Span::styled("Press i to edit", Style::default().fg(MUTED))
    };
    lines.push(Line::from(hint));
    lines
}

/// Form embedded in a page.
pub fn render_inline(frame: &mut Frame, area: Rect, state: &FormDialogState, active: bool) {
    let title = state.kind().map(|kind| kind.title()).unwrap_or_default();
    frame.render_widget(
        Paragraph::new(field_lines(state, active)).block(widgets::panel(&title)),
        area,
    );
}

/// Modal form over the page.
pub fn render_dialog(frame: &mut Frame, area: Rect, state: &FormDialogState) {
    let Some(kind) = state.kind() else {
        return;
    };
    PopupDialog::new(kind.title(), field_lines(state, true))
        .fixed_width(72)
        .render(frame, area);
}
