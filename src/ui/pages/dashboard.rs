use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::models::MetalType;
use crate::query::combined_loading;
use crate::ui::app::App;
use crate::ui::format;
use crate::ui::layout::{columns, split_top};
use crate::ui::theme::{metal_color, HEADER_TEXT, MUTED, STATUS_INFO, STATUS_OK};
use crate::ui::widgets;
use crate::worker::{Resource, ResourceData};

/// Reads behind the overview cards.
pub fn resources() -> Vec<Resource> {
    vec![
        Resource::Users { limit: 1 },
        Resource::Products { limit: 1 },
        Resource::LatestPrice(MetalType::Gold),
        Resource::LatestPrice(MetalType::Silver),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let reads = resources();
    let loading = combined_loading(reads.iter().map(|read| app.status(read).is_loading()));
    let (cards_area, rest) = split_top(area, 5);
    let cards = columns(cards_area, 4);

    if loading {
        for (card, title) in cards
            .iter()
            .zip(["Total Users", "Products", "Gold Price", "Silver Price"])
        {
            widgets::skeleton(frame, *card, title);
        }
    } else {
        let users = match app.status(&reads[0]).data() {
            Some(ResourceData::Users(list)) => format::count(list.total),
            _ => format::MISSING.to_string(),
        };
        let products = match app.status(&reads[1]).data() {
            Some(ResourceData::Products(list)) => format::count(list.total),
            _ => format::MISSING.to_string(),
        };
        widgets::stat_card(frame, cards[0], "Total Users", users, STATUS_INFO);
        widgets::stat_card(frame, cards[1], "Products", products, STATUS_OK);
        for (card, read) in cards[2..].iter().zip(&reads[2..]) {
            let Resource::LatestPrice(metal) = read else {
                continue;
            };
            let price = match app.status(read).data() {
                Some(ResourceData::Price(price)) => format!("{}/g", format::currency(price.headline())),
                _ => format::MISSING.to_string(),
            };
            widgets::stat_card(
                frame,
                *card,
                &format!("{} Price", metal.label()),
                price,
                metal_color(*metal),
            );
        }
    }

    let errors: Vec<Line> = reads
        .iter()
        .filter_map(|read| app.status(read).error())
        .map(|message| Line::from(Span::styled(message.to_string(), Style::default().fg(MUTED))))
        .collect();
    let mut lines = vec![
        Line::from(Span::styled(
            "Welcome to the admin console.",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from("Press 1-8 to switch screens, r to refresh, q to quit."),
    ];
    if !errors.is_empty() {
        lines.push(Line::from(""));
        lines.extend(errors);
    }
    frame.render_widget(Paragraph::new(lines).block(widgets::panel("Overview")), rest);
}
