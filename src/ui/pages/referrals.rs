use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::models::{MetalType, ReferralConfig};
use crate::ui::app::App;
use crate::ui::format;
use crate::ui::layout::{columns, split_top};
use crate::ui::theme::{metal_color, MUTED};
use crate::ui::widgets;
use crate::worker::{Resource, ResourceData};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReferralsView {
    pub selected: MetalType,
}

impl ReferralsView {
    pub fn resources(&self) -> Vec<Resource> {
        MetalType::ALL.iter().map(|metal| Resource::Referral(*metal)).collect()
    }
}

/// Saved configuration for `metal`, once loaded.
pub fn config(app: &App, metal: MetalType) -> Option<ReferralConfig> {
    match app.status(&Resource::Referral(metal)).data() {
        Some(ResourceData::Referral(config)) => Some(*config),
        _ => None,
    }
}

fn card(frame: &mut Frame, area: Rect, app: &App, metal: MetalType, selected: bool) {
    let title = format!("{} Referral", metal.label());
    let status = app.status(&Resource::Referral(metal));
    if status.is_loading() {
        widgets::skeleton(frame, area, &title);
        return;
    }
    if let Some(message) = status.error() {
        widgets::error_panel(frame, area, &title, message);
        return;
    }
    let mut lines = match config(app, metal) {
        Some(config) => vec![
            widgets::key_value("Referrer bonus", format::currency(Some(config.referrer_bonus))),
            widgets::key_value("Referee bonus", format::currency(Some(config.referee_bonus))),
            widgets::key_value("Min investment", format::currency(Some(config.min_investment))),
        ],
        None => vec![Line::from(format::MISSING)],
    };
    lines.push(Line::from(""));
    lines.push(Line::styled(
        if selected { "Enter/e: Edit" } else { "Tab: Select" },
        Style::default().fg(MUTED),
    ));
    let block = widgets::panel(&title);
    let block = if selected {
        block.border_style(
            Style::default()
                .fg(metal_color(metal))
                .add_modifier(Modifier::BOLD),
        )
    } else {
        block
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.referrals_view();
    let (cards_area, _) = split_top(area, 9);
    let parts = columns(cards_area, 2);
    for (part, metal) in parts.iter().zip(MetalType::ALL) {
        card(frame, *part, app, metal, view.selected == metal);
    }
}
