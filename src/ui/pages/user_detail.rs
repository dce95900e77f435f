use ratatui::layout::{Constraint, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Row};
use ratatui::Frame;

use crate::models::{OrderItem, Redemption};
use crate::query::QueryStatus;
use crate::ui::app::App;
use crate::ui::format;
use crate::ui::layout::{columns, split_top};
use crate::ui::pages::orders::{
    ornament_rows, purchase_rows, wallet_rows, ORNAMENT_HEADER, ORNAMENT_WIDTHS,
    PURCHASE_HEADER, PURCHASE_WIDTHS, WALLET_HEADER, WALLET_WIDTHS,
};
use crate::ui::theme::{kyc_color, redemption_color};
use crate::ui::widgets;
use crate::worker::{Resource, ResourceData, UserTab};

/// One user's profile and activity.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDetailView {
    pub user_id: String,
    pub tab: UserTab,
    pub selected: usize,
    limit: u32,
}

impl UserDetailView {
    pub fn new(user_id: String, limit: u32) -> Self {
        Self {
            user_id,
            tab: UserTab::default(),
            selected: 0,
            limit,
        }
    }

    pub fn profile(&self) -> Resource {
        Resource::User {
            id: self.user_id.clone(),
        }
    }

    pub fn history(&self) -> Resource {
        Resource::UserHistory {
            user_id: self.user_id.clone(),
            tab: self.tab,
            limit: self.limit,
        }
    }

    pub fn resources(&self) -> Vec<Resource> {
        vec![self.profile(), self.history()]
    }

    pub fn next_tab(&mut self) {
        let index = UserTab::ALL.iter().position(|tab| *tab == self.tab).unwrap_or(0);
        self.tab = UserTab::ALL[(index + 1) % UserTab::ALL.len()];
        self.selected = 0;
    }

    pub fn prev_tab(&mut self) {
        let len = UserTab::ALL.len();
        let index = UserTab::ALL.iter().position(|tab| *tab == self.tab).unwrap_or(0);
        self.tab = UserTab::ALL[(index + len - 1) % len];
        self.selected = 0;
    }

    /// Ornament order under the cursor, when the ornaments tab is showing.
    pub fn selected_ornament<'a>(&self, history: &'a QueryStatus<ResourceData>) -> Option<&'a OrderItem> {
        if self.tab != UserTab::OrnamentOrders {
            return None;
        }
        match history.data() {
            Some(ResourceData::Orders(list)) => list.orders.get(self.selected),
            _ => None,
        }
    }
}

/// Rows in the active history tab.
pub fn history_len(data: Option<&ResourceData>) -> usize {
    match data {
        Some(ResourceData::Orders(list)) => list.orders.len(),
        Some(ResourceData::Wallet(list)) => list.transactions.len(),
        Some(ResourceData::Redemptions(list)) => list.redemptions.len(),
        _ => 0,
    }
}

fn redemption_rows(redemptions: &[Redemption]) -> Vec<Row<'static>> {
    redemptions
        .iter()
        .map(|redemption| {
            let status = redemption.status.clone().unwrap_or_default();
            Row::new(vec![
                Line::from(format::text(redemption.metal_type.as_deref())),
                Line::from(format::grams(redemption.grams)),
                Line::from(format::currency(redemption.price_per_gram)),
                Line::from(format::currency(redemption.total_amount)),
                Line::from(widgets::badge(status.label(), redemption_color(&status))),
                Line::from(format::text(redemption.masked_account().as_deref())),
                Line::from(format::date(redemption.created_at.as_deref())),
            ])
        })
        .collect()
}

fn render_profile(frame: &mut Frame, area: Rect, status: &QueryStatus<ResourceData>) {
    let parts = columns(area, 2);
    if status.is_loading() {
        widgets::skeleton(frame, parts[0], "Profile");
        widgets::skeleton(frame, parts[1], "Balances");
        return;
    }
    if let Some(message) = status.error() {
        widgets::error_panel(frame, area, "User", message);
        return;
    }
    let Some(ResourceData::User(detail)) = status.data() else {
        widgets::empty_panel(frame, area, "User", "User not found");
        return;
    };
    let user = &detail.user;
    let kyc = user.kyc();
    let profile = vec![
        widgets::key_value("Name", user.display_name()),
        widgets::key_value("Email", user.email.clone()),
        widgets::key_value("Phone", format::text(user.phone_number.as_deref())),
        Line::from(vec![
            widgets::label("KYC"),
            widgets::badge(kyc.label(), kyc_color(&kyc)),
        ]),
        widgets::key_value("Referral code", format::text(user.referral_code.as_deref())),
        widgets::key_value("Joined", format::date(user.created_at.as_deref())),
    ];
    let balances = vec![
        widgets::key_value("Gold", format::balance(Some(detail.gold()), "g")),
        widgets::key_value("Silver", format::balance(Some(detail.silver()), "g")),
        widgets::key_value("Total orders", format::count(detail.total_orders)),
        widgets::key_value("Transactions", format::count(detail.total_transactions)),
    ];
    frame.render_widget(
        Paragraph::new(profile).block(widgets::panel("Profile")),
        parts[0],
    );
    frame.render_widget(
        Paragraph::new(balances).block(widgets::panel("Balances")),
        parts[1],
    );
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(view) = app.user_detail_view() else {
        widgets::empty_panel(frame, area, "User", "Select a user on the Users screen");
        return;
    };
    let (profile_area, rest) = split_top(area, 8);
    render_profile(frame, profile_area, app.status(&view.profile()));

    let (tabs_area, table_area) = split_top(rest, 2);
    let selected_tab = UserTab::ALL.iter().position(|tab| *tab == view.tab).unwrap_or(0);
    widgets::tabs(
        frame,
        tabs_area,
        UserTab::ALL.iter().map(|tab| tab.label().to_string()).collect(),
        selected_tab,
    );

    let title = view.tab.label();
    let history = app.status(&view.history());
    let selected = Some(view.selected);
    match view.tab {
        UserTab::GoldPurchases | UserTab::SilverPurchases => widgets::list_region(
            frame,
            table_area,
            title,
            history.list_view(|data| match data {
                ResourceData::Orders(list) => list.orders.as_slice(),
                _ => &[],
            }),
            "No purchases",
            |frame, area, orders| {
                widgets::table(
                    frame,
                    area,
                    title,
                    &PURCHASE_HEADER,
                    &PURCHASE_WIDTHS,
                    purchase_rows(orders),
                    selected,
                )
            },
        ),
        UserTab::OrnamentOrders => widgets::list_region(
            frame,
            table_area,
            "Ornaments (f: advance fulfillment)",
            history.list_view(|data| match data {
                ResourceData::Orders(list) => list.orders.as_slice(),
                _ => &[],
            }),
            "No ornament orders",
            |frame, area, orders| {
                widgets::table(
                    frame,
                    area,
                    "Ornaments (f: advance fulfillment)",
                    &ORNAMENT_HEADER,
                    &ORNAMENT_WIDTHS,
                    ornament_rows(orders),
                    selected,
                )
            },
        ),
        UserTab::WalletTransactions => widgets::list_region(
            frame,
            table_area,
            title,
            history.list_view(|data| match data {
                ResourceData::Wallet(list) => list.transactions.as_slice(),
                _ => &[],
            }),
            "No wallet transactions",
            |frame, area, transactions| {
                widgets::table(
                    frame,
                    area,
                    title,
                    &WALLET_HEADER,
                    &WALLET_WIDTHS,
                    wallet_rows(transactions),
                    selected,
                )
            },
        ),
        UserTab::Redemptions => widgets::list_region(
            frame,
            table_area,
            title,
            history.list_view(|data| match data {
                ResourceData::Redemptions(list) => list.redemptions.as_slice(),
                _ => &[],
            }),
            "No redemptions",
            |frame, area, redemptions| {
                widgets::table(
                    frame,
                    area,
                    title,
                    &["Metal", "Grams", "Rate", "Amount", "Status", "Account", "Date"],
                    &[
                        Constraint::Percentage(10),
                        Constraint::Percentage(12),
                        Constraint::Percentage(12),
                        Constraint::Percentage(14),
                        Constraint::Percentage(14),
                        Constraint::Percentage(20),
                        Constraint::Percentage(18),
                    ],
                    redemption_rows(redemptions),
                    selected,
                )
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderListResponse;

    #[test]
    fn history_resource_follows_tab() {
        let mut view = UserDetailView::new("u7".to_string(), 100);
        assert_eq!(
            view.history().key().to_string(),
            "[admin-gold-purchases, u7]"
        );
        view.prev_tab();
        assert_eq!(view.tab, UserTab::Redemptions);
        view.next_tab();
        view.next_tab();
        view.next_tab();
        assert_eq!(view.tab, UserTab::OrnamentOrders);
        assert_eq!(
            view.history().key().to_string(),
            "[admin-ornament-orders, u7]"
        );
    }

    #[test]
    fn selected_ornament_reads_settled_history() {
        let mut view = UserDetailView::new("u7".to_string(), 100);
        let order: OrderItem = serde_json::from_value(serde_json::json!({"id": "o9"})).unwrap();
        let history = QueryStatus::Success(ResourceData::Orders(OrderListResponse {
            orders: vec![order],
            total: 1,
            skip: 0,
            limit: 100,
        }));
        assert!(view.selected_ornament(&history).is_none());
        view.tab = UserTab::OrnamentOrders;
        assert_eq!(
            view.selected_ornament(&history).map(|o| o.id.as_str()),
            Some("o9")
        );
        assert_eq!(history_len(history.data()), 1);
    }
}
