use chrono::{DateTime, NaiveDateTime};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Row};
use ratatui::Frame;

use crate::models::UserListItem;
use crate::query::PageIndex;
use crate::ui::app::App;
use crate::ui::format;
use crate::ui::layout::split_top;
use crate::ui::theme::{kyc_color, BRAND_GOLD, HEADER_TEXT, MUTED};
use crate::ui::widgets;
use crate::worker::{Resource, ResourceData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSort {
    Email,
    Created,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Client-side filtering, sorting and paging over the fetched users.
#[derive(Debug, Clone, PartialEq)]
pub struct UsersView {
    pub search: String,
    sort: Option<(UserSort, SortOrder)>,
    pub index: PageIndex,
    pub selected: usize,
}

impl UsersView {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            sort: None,
            index: PageIndex::new(page_size),
            selected: 0,
        }
    }

    pub fn sort(&self) -> Option<(UserSort, SortOrder)> {
        self.sort
    }

    /// Sorting by the active field flips the order; a new field starts ascending.
    pub fn sort_by(&mut self, field: UserSort) {
        self.sort = match self.sort {
            Some((active, SortOrder::Asc)) if active == field => Some((field, SortOrder::Desc)),
            Some((active, SortOrder::Desc)) if active == field => Some((field, SortOrder::Asc)),
            _ => Some((field, SortOrder::Asc)),
        };
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.index.reset();
        self.selected = 0;
    }

    /// Users matching the search, in display order.
    pub fn visible<'a>(&self, users: &'a [UserListItem]) -> Vec<&'a UserListItem> {
        let mut rows: Vec<&UserListItem> = users
            .iter()
            .filter(|user| user.matches(&self.search))
            .collect();
        if let Some((field, order)) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = match field {
                    UserSort::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
                    UserSort::Created => created_millis(a).cmp(&created_millis(b)),
                };
                match order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }
        rows
    }

    /// The row under the cursor on the current page.
    pub fn selected_user<'a>(&self, users: &'a [UserListItem]) -> Option<&'a UserListItem> {
        let visible = self.visible(users);
        self.index.slice(&visible).get(self.selected).copied()
    }
}

fn created_millis(user: &UserListItem) -> i64 {
    let Some(raw) = user.created_at.as_deref() else {
        return 0;
    };
    DateTime::parse_from_rfc3339(raw)
        .map(|stamp| stamp.timestamp_millis())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|stamp| stamp.and_utc().timestamp_millis())
        })
        .unwrap_or(0)
}

fn sort_marker(view: &UsersView, field: UserSort) -> &'static str {
    match view.sort() {
        Some((active, SortOrder::Asc)) if active == field => " ▲",
        Some((active, SortOrder::Desc)) if active == field => " ▼",
        _ => "",
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.users_view();
    let (search_area, rest) = split_top(area, 1);
    let (table_area, pager_area) = split_top(rest, rest.height.saturating_sub(1));

    let cursor = if app.is_searching() { "█" } else { "" };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Search: ", Style::default().fg(MUTED)),
            Span::styled(
                format!("{}{cursor}", view.search),
                Style::default().fg(HEADER_TEXT),
            ),
        ])),
        search_area,
    );

    let status = app.status(&Resource::Users {
        limit: app.ui_config().list_fetch_limit,
    });
    let list = status.list_view(|data| match data {
        ResourceData::Users(list) => list.users.as_slice(),
        _ => &[],
    });

    let email_header = format!("Email{}", sort_marker(view, UserSort::Email));
    let joined_header = format!("Joined{}", sort_marker(view, UserSort::Created));
    widgets::list_region(
        frame,
        table_area,
        "Users",
        list,
        "No users found",
        |frame, area, users| {
            let visible = view.visible(users);
            let rows: Vec<Row> = view
                .index
                .slice(&visible)
                .iter()
                .map(|user| {
                    let kyc = user.kyc();
                    Row::new(vec![
                        Line::from(user.display_name()),
                        Line::from(user.email.clone()),
                        Line::from(format::text(user.phone_number.as_deref())),
                        Line::from(widgets::badge(kyc.label(), kyc_color(&kyc))),
                        Line::from(format::balance(user.gold_balance, "g")),
                        Line::from(format::balance(user.silver_balance, "g")),
                        Line::from(format::date(user.created_at.as_deref())),
                    ])
                })
                .collect();
            let selected = (!rows.is_empty()).then_some(view.selected);
            widgets::table(
                frame,
                area,
                "Users",
                &[
                    "Name",
                    email_header.as_str(),
                    "Phone",
                    "KYC",
                    "Gold",
                    "Silver",
                    joined_header.as_str(),
                ],
                &[
                    Constraint::Percentage(18),
                    Constraint::Percentage(24),
                    Constraint::Percentage(13),
                    Constraint::Percentage(11),
                    Constraint::Percentage(10),
                    Constraint::Percentage(10),
                    Constraint::Percentage(14),
                ],
                rows,
                selected,
            );

            let len = visible.len();
            let first = if len == 0 {
                0
            } else {
                view.index.page() * view.index.page_size() + 1
            };
            let last = ((view.index.page() + 1) * view.index.page_size()).min(len);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!(
                        " Showing {first} to {last} of {len} users  ·  page {}/{}",
                        view.index.page() + 1,
                        view.index.page_count(len).max(1)
                    ),
                    Style::default().fg(BRAND_GOLD),
                ))),
                pager_area,
            );
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emails(rows: &[&UserListItem]) -> Vec<String> {
        rows.iter().map(|user| user.email.clone()).collect()
    }

    fn user(email: &str, first: &str, created: &str) -> UserListItem {
        serde_json::from_value(serde_json::json!({
            "id": email,
            "email": email,
            "firstName": first,
            "createdAt": created,
        }))
        .unwrap()
    }

    fn sample() -> Vec<UserListItem> {
        vec![
            user("zoe@x.in", "Zoe", "2024-01-03T00:00:00Z"),
            user("amit@x.in", "Amit", "2024-01-01T00:00:00Z"),
            user("meera@x.in", "Meera", "2024-01-02T00:00:00Z"),
        ]
    }

    #[test]
    fn unsorted_keeps_server_order() {
        let users = sample();
        let view = UsersView::new(10);
        assert_eq!(
            emails(&view.visible(&users)),
            vec!["zoe@x.in", "amit@x.in", "meera@x.in"]
        );
    }

    #[test]
    fn sorting_same_field_twice_flips_order() {
        let users = sample();
        let mut view = UsersView::new(10);
        view.sort_by(UserSort::Email);
        assert_eq!(
            emails(&view.visible(&users)),
            vec!["amit@x.in", "meera@x.in", "zoe@x.in"]
        );
        view.sort_by(UserSort::Email);
        assert_eq!(view.sort(), Some((UserSort::Email, SortOrder::Desc)));
        assert_eq!(
            emails(&view.visible(&users)),
            vec!["zoe@x.in", "meera@x.in", "amit@x.in"]
        );
        view.sort_by(UserSort::Created);
        assert_eq!(view.sort(), Some((UserSort::Created, SortOrder::Asc)));
        assert_eq!(
            emails(&view.visible(&users)),
            vec!["amit@x.in", "meera@x.in", "zoe@x.in"]
        );
    }

    #[test]
    fn search_filters_and_resets_paging() {
        let users = sample();
        let mut view = UsersView::new(1);
        view.index.next(3);
        view.set_search("MEE".to_string());
        assert_eq!(view.index.page(), 0);
        assert_eq!(emails(&view.visible(&users)), vec!["meera@x.in"]);
        assert_eq!(
            view.selected_user(&users).map(|u| u.email.as_str()),
            Some("meera@x.in")
        );
    }
}
