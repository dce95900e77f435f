use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::models::Scheme;
use crate::query::QueryStatus;
use crate::ui::app::App;
use crate::ui::format;
use crate::ui::layout::split_top;
use crate::ui::theme::{HEADER_TEXT, MUTED, STATUS_OK};
use crate::ui::widgets;
use crate::worker::{Resource, ResourceData};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum SchemeTab {
    #[default]
    Description,
    Terms,
}

impl SchemeTab {
    pub const ALL: [SchemeTab; 2] = [SchemeTab::Description, SchemeTab::Terms];

    pub fn label(self) -> &'static str {
        match self {
            SchemeTab::Description => "Description",
            SchemeTab::Terms => "Terms & Conditions",
        }
    }

    pub fn other(self) -> Self {
        match self {
            SchemeTab::Description => SchemeTab::Terms,
            SchemeTab::Terms => SchemeTab::Description,
        }
    }
}

/// Read-only view of one scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeDetailView {
    pub scheme_id: String,
    pub tab: SchemeTab,
}

impl SchemeDetailView {
    pub fn new(scheme_id: String) -> Self {
        Self {
            scheme_id,
            tab: SchemeTab::default(),
        }
    }

    pub fn resource(&self) -> Resource {
        Resource::Scheme {
            id: self.scheme_id.clone(),
        }
    }

    /// The scheme once its read has settled.
    pub fn scheme<'a>(&self, status: &'a QueryStatus<ResourceData>) -> Option<&'a Scheme> {
        match status.data() {
            Some(ResourceData::Scheme(scheme)) => Some(scheme),
            _ => None,
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(view) = app.scheme_detail_view() else {
        widgets::empty_panel(frame, area, "Scheme", "Select a scheme on the Schemes screen");
        return;
    };
    let status = app.status(&view.resource());
    if status.is_loading() {
        widgets::skeleton(frame, area, "Scheme");
        return;
    }
    let Some(scheme) = view.scheme(status) else {
        let message = status.error().unwrap_or("The scheme you are looking for does not exist.");
        widgets::error_panel(frame, area, "Scheme not found", message);
        return;
    };

    let (info_area, rest) = split_top(area, 7);
    let active = if scheme.is_active {
        widgets::badge("Active", STATUS_OK)
    } else {
        widgets::badge("Inactive", MUTED)
    };
    let info = vec![
        widgets::key_value("Name", scheme.name.clone()),
        Line::from(vec![widgets::label("Status"), active]),
        widgets::key_value("Created", format::date(scheme.created_at.as_deref())),
        widgets::key_value("Last updated", format::date(scheme.updated_at.as_deref())),
    ];
    frame.render_widget(
        Paragraph::new(info).block(widgets::panel("Scheme Information")),
        info_area,
    );

    let (tabs_area, body_area) = split_top(rest, 2);
    let selected = SchemeTab::ALL
        .iter()
        .position(|tab| *tab == view.tab)
        .unwrap_or(0);
    widgets::tabs(
        frame,
        tabs_area,
        SchemeTab::ALL
            .iter()
            .map(|tab| tab.label().to_string())
            .collect(),
        selected,
    );

    let (text, fallback) = match view.tab {
        SchemeTab::Description => (
            scheme.description.as_deref(),
            "No description provided",
        ),
        SchemeTab::Terms => (
            scheme.terms_and_conditions.as_deref(),
            "No terms and conditions provided",
        ),
    };
    let body = match text.map(str::trim).filter(|text| !text.is_empty()) {
        Some(text) => Span::styled(text.to_string(), Style::default().fg(HEADER_TEXT)),
        None => Span::styled(fallback, Style::default().fg(MUTED)),
    };
    frame.render_widget(
        Paragraph::new(Line::from(body))
            .wrap(Wrap { trim: false })
            .block(widgets::panel(view.tab.label())),
        body_area,
    );
}
