use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Row};
use ratatui::Frame;

use crate::models::RefundHistory;
use crate::query::OffsetPager;
use crate::ui::app::App;
use crate::ui::form::render_inline;
use crate::ui::format;
use crate::ui::layout::split_top;
use crate::ui::theme::{refund_color, BRAND_GOLD, MUTED};
use crate::ui::widgets;
use crate::worker::Resource;

const FORM_HEIGHT: u16 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentsView {
    pub refunds: OffsetPager<RefundHistory>,
}

impl PaymentsView {
    pub fn new(limit: u32) -> Self {
        Self {
            refunds: OffsetPager::new(limit),
        }
    }

    pub fn first_page(&self) -> Resource {
        Resource::Refunds {
            skip: 0,
            limit: self.refunds.limit(),
        }
    }

    pub fn next_page(&self) -> Option<Resource> {
        self.refunds.next_skip().map(|skip| Resource::Refunds {
            skip,
            limit: self.refunds.limit(),
        })
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.payments_view();
    let (form_area, rest) = split_top(area, FORM_HEIGHT);
    render_inline(frame, form_area, app.refund_form(), app.inline_form_active());

    let (table_area, footer_area) = split_top(rest, rest.height.saturating_sub(1));
    let first = app.status(&view.first_page());

    widgets::list_region(
        frame,
        table_area,
        "Recent Refunds",
        first.accumulated_view(view.refunds.items()),
        "No refunds yet",
        |frame, area, refunds| {
            let rows: Vec<Row> = refunds
                .iter()
                .map(|refund| {
                    let state = refund.status.clone().unwrap_or_default();
                    Row::new(vec![
                        Line::from(format::text(refund.order_id.as_deref())),
                        Line::from(format::currency(refund.amount)),
                        Line::from(format::text(refund.reason.as_deref())),
                        Line::from(widgets::badge(state.label(), refund_color(&state))),
                        Line::from(format::date(refund.created_at.as_deref())),
                    ])
                })
                .collect();
            widgets::table(
                frame,
                area,
                "Recent Refunds",
                &["Order", "Amount", "Reason", "Status", "Date"],
                &[
                    Constraint::Percentage(22),
                    Constraint::Percentage(14),
                    Constraint::Percentage(34),
                    Constraint::Percentage(14),
                    Constraint::Percentage(16),
                ],
                rows,
                None,
            );
        },
    );

    let loading_more = view
        .next_page()
        .is_some_and(|next| app.is_fetching(&next));
    let text = if loading_more {
        Span::styled(" Loading…", Style::default().fg(BRAND_GOLD))
    } else if view.refunds.has_more() {
        Span::styled(
            format!(
                " {} of {} refunds  ·  m: Load more",
                view.refunds.items().len(),
                view.refunds.total()
            ),
            Style::default().fg(BRAND_GOLD),
        )
    } else {
        Span::styled(
            format!(" {} refunds", view.refunds.items().len()),
            Style::default().fg(MUTED),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(text)), footer_area);
}
