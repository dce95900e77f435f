//! Stateless renderers shared by the pages.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Tabs, Wrap};
use ratatui::Frame;

use crate::query::ListView;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_GOLD, GLOBAL_BORDER, HEADER_TEXT, MUTED, STATUS_ERROR,
};

const SKELETON_ROWS: usize = 5;

pub fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

/// Coloured status pill.
pub fn badge(label: impl Into<String>, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", label.into()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

pub fn stat_card(frame: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(panel(title)), area);
}

/// Placeholder rows while a read is in flight.
pub fn skeleton(frame: &mut Frame, area: Rect, title: &str) {
    let bar = "░".repeat(usize::from(area.width.saturating_sub(4)));
    let lines: Vec<Line> = (0..SKELETON_ROWS)
        .map(|_| Line::from(Span::styled(bar.clone(), Style::default().fg(MUTED))))
        .collect();
    frame.render_widget(Paragraph::new(lines).block(panel(title)), area);
}

pub fn error_panel(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(STATUS_ERROR),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to retry",
            Style::default().fg(MUTED),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(panel(title))
            .wrap(Wrap { trim: true }),
        area,
    );
}

pub fn empty_panel(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(MUTED),
        )))
        .block(panel(title)),
        area,
    );
}

pub fn tabs(frame: &mut Frame, area: Rect, titles: Vec<String>, selected: usize) {
    let widget = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(MUTED))
        .highlight_style(Style::default().fg(BRAND_GOLD).add_modifier(Modifier::BOLD))
        .divider(Span::styled("│", Style::default().fg(GLOBAL_BORDER)))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(widget, area);
}

/// Bordered table with a bold header and an optional highlighted row.
pub fn table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    header: &[&str],
    widths: &[Constraint],
    rows: Vec<Row<'_>>,
    selected: Option<usize>,
) {
    let header = Row::new(header.iter().map(|name| {
        Cell::from(Span::styled(
            name.to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
    }))
    .bottom_margin(1);
    let widget = Table::new(rows, widths.to_vec())
        .header(header)
        .block(panel(title))
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("› ");
    let mut state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(widget, area, &mut state);
}

/// Renders the loading, error or empty placeholder, or hands the rows over.
pub fn list_region<'a, I>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    view: ListView<'a, I>,
    empty: &str,
    rows: impl FnOnce(&mut Frame, Rect, &'a [I]),
) {
    match view {
        ListView::Loading => skeleton(frame, area, title),
        ListView::Error(message) => error_panel(frame, area, title, message),
        ListView::Empty => empty_panel(frame, area, title, empty),
        ListView::Rows(items) => rows(frame, area, items),
    }
}

pub fn label(text: &str) -> Span<'static> {
    Span::styled(format!("{text:<18}"), Style::default().fg(MUTED))
}

pub fn key_value(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        label(name),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ])
}
