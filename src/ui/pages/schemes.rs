use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Row};
use ratatui::Frame;

use crate::models::Scheme;
use crate::query::QueryStatus;
use crate::ui::app::App;
use crate::ui::format;
use crate::ui::layout::split_top;
use crate::ui::theme::{BRAND_GOLD, MUTED, STATUS_OK};
use crate::ui::widgets;
use crate::worker::{Resource, ResourceData};

/// Previous/next offset paging over the schemes endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemesView {
    pub skip: u32,
    limit: u32,
    pub selected: usize,
}

impl SchemesView {
    pub fn new(limit: u32) -> Self {
        Self {
            skip: 0,
            limit: limit.max(1),
            selected: 0,
        }
    }

    pub fn resource(&self) -> Resource {
        Resource::Schemes {
            skip: self.skip,
            limit: self.limit,
        }
    }

    pub fn next(&mut self, total: u64) {
        if u64::from(self.skip + self.limit) < total {
            self.skip += self.limit;
            self.selected = 0;
        }
    }

    pub fn prev(&mut self) {
        self.skip = self.skip.saturating_sub(self.limit);
        self.selected = 0;
    }

    pub fn selected_scheme<'a>(&self, status: &'a QueryStatus<ResourceData>) -> Option<&'a Scheme> {
        match status.data() {
            Some(ResourceData::Schemes(list)) => list.schemes.get(self.selected),
            _ => None,
        }
    }
}

/// Total reported by the last settled page.
pub fn total(status: &QueryStatus<ResourceData>) -> u64 {
    match status.data() {
        Some(ResourceData::Schemes(list)) => list.total,
        _ => 0,
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.schemes_view();
    let status = app.status(&view.resource());
    let (table_area, footer_area) = split_top(area, area.height.saturating_sub(1));

    widgets::list_region(
        frame,
        table_area,
        "Schemes",
        status.list_view(|data| match data {
            ResourceData::Schemes(list) => list.schemes.as_slice(),
            _ => &[],
        }),
        "No schemes yet. Press n to create one.",
        |frame, area, schemes| {
            let rows: Vec<Row> = schemes
                .iter()
                .map(|scheme| {
                    let active = if scheme.is_active {
                        widgets::badge("Active", STATUS_OK)
                    } else {
                        widgets::badge("Inactive", MUTED)
                    };
                    Row::new(vec![
                        Line::from(scheme.name.clone()),
                        Line::from(format::text(scheme.description.as_deref())),
                        Line::from(active),
                        Line::from(format::date(scheme.created_at.as_deref())),
                    ])
                })
                .collect();
            widgets::table(
                frame,
                area,
                "Schemes",
                &["Name", "Description", "Status", "Created"],
                &[
                    Constraint::Percentage(24),
                    Constraint::Percentage(46),
                    Constraint::Percentage(14),
                    Constraint::Percentage(16),
                ],
                rows,
                Some(view.selected),
            );
        },
    );

    let total = total(status);
    let text = if total == 0 {
        Span::styled(" n: New scheme", Style::default().fg(MUTED))
    } else {
        let last = u64::from(view.skip + view.limit).min(total);
        Span::styled(
            format!(
                " Showing {} to {last} of {total} schemes  ·  [ ]: Page  n: New  e: Edit  d: Delete",
                view.skip + 1
            ),
            Style::default().fg(BRAND_GOLD),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(text)), footer_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paging_stops_at_both_ends() {
        let mut view = SchemesView::new(10);
        view.prev();
        assert_eq!(view.skip, 0);
        view.next(25);
        view.next(25);
        assert_eq!(view.skip, 20);
        view.next(25);
        assert_eq!(view.skip, 20);
        assert_eq!(view.resource().key().to_string(), "[admin-schemes, 20, 10]");
    }
}
