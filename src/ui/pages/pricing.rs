use ratatui::layout::{Constraint, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Row};
use ratatui::Frame;

use crate::models::MetalType;
use crate::ui::app::App;
use crate::ui::form::render_inline;
use crate::ui::format;
use crate::ui::layout::{columns, split_top};
use crate::ui::widgets;
use crate::worker::{Resource, ResourceData, HISTORY_DAYS};

const FORM_HEIGHT: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PricingView {
    pub history_metal: MetalType,
}

impl PricingView {
    pub fn toggle_history(&mut self) {
        self.history_metal = self.history_metal.other();
    }

    pub fn resources(&self) -> Vec<Resource> {
        vec![
            Resource::LatestPrice(MetalType::Gold),
            Resource::LatestPrice(MetalType::Silver),
            Resource::PriceHistory(self.history_metal),
        ]
    }
}

fn price_card(frame: &mut Frame, area: Rect, app: &App, metal: MetalType) {
    let title = format!("Current {} Price", metal.label());
    let status = app.status(&Resource::LatestPrice(metal));
    if status.is_loading() {
        widgets::skeleton(frame, area, &title);
        return;
    }
    if let Some(message) = status.error() {
        widgets::error_panel(frame, area, &title, message);
        return;
    }
    let lines = match status.data() {
        Some(ResourceData::Price(price)) => vec![
            widgets::key_value("Buy", format::currency(price.buy_price)),
            widgets::key_value("Sell", format::currency(price.sell_price)),
            widgets::key_value("Per gram", format::currency(price.price_per_gram)),
            widgets::key_value("Updated", format::date(price.timestamp.as_deref())),
        ],
        _ => vec![Line::from(format::MISSING)],
    };
    frame.render_widget(Paragraph::new(lines).block(widgets::panel(&title)), area);
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.pricing_view();
    let (cards_area, rest) = split_top(area, 6);
    let cards = columns(cards_area, 2);
    price_card(frame, cards[0], app, MetalType::Gold);
    price_card(frame, cards[1], app, MetalType::Silver);

    let (form_area, history_area) = split_top(rest, FORM_HEIGHT);
    render_inline(frame, form_area, app.price_form(), app.inline_form_active());

    let title = format!(
        "{} price history, last {HISTORY_DAYS} days (Tab: switch metal)",
        view.history_metal.label()
    );
    let status = app.status(&Resource::PriceHistory(view.history_metal));
    let list = status.list_view(|data| match data {
        ResourceData::PriceHistory(entries) => entries.as_slice(),
        _ => &[],
    });
    widgets::list_region(
        frame,
        history_area,
        &title,
        list,
        "No price history for this period",
        |frame, area, entries| {
            let rows: Vec<Row> = entries
                .iter()
                .rev()
                .map(|entry| {
                    Row::new(vec![
                        format::date(Some(entry.date.as_str())),
                        format::currency(entry.price),
                    ])
                })
                .collect();
            widgets::table(
                frame,
                area,
                &title,
                &["Date", "Price (₹/g)"],
                &[Constraint::Percentage(50), Constraint::Percentage(50)],
                rows,
                None,
            );
        },
    );
}
