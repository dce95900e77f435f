use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Row};
use ratatui::Frame;

use crate::models::{OrderItem, WalletTransaction};
use crate::query::OffsetPager;
use crate::ui::app::App;
use crate::ui::format;
use crate::ui::layout::{columns, split_top};
use crate::ui::theme::{
    fulfillment_color, order_status_color, transaction_color, BRAND_GOLD, MUTED, SILVER,
    STATUS_ERROR, STATUS_INFO, STATUS_OK,
};
use crate::ui::widgets;
use crate::worker::{OrderStream, Resource, ResourceData};

/// Four Load-More streams behind the orders tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdersView {
    pub tab: OrderStream,
    pub selected: usize,
    gold: OffsetPager<OrderItem>,
    silver: OffsetPager<OrderItem>,
    ornaments: OffsetPager<OrderItem>,
    wallet: OffsetPager<WalletTransaction>,
}

impl OrdersView {
    pub fn new(limit: u32) -> Self {
        Self {
            tab: OrderStream::Gold,
            selected: 0,
            gold: OffsetPager::new(limit),
            silver: OffsetPager::new(limit),
            ornaments: OffsetPager::new(limit),
            wallet: OffsetPager::new(limit),
        }
    }

    fn limit(&self) -> u32 {
        self.gold.limit()
    }

    pub fn first_page(&self, stream: OrderStream) -> Resource {
        Resource::Orders {
            stream,
            skip: 0,
            limit: self.limit(),
        }
    }

    pub fn first_pages(&self) -> Vec<Resource> {
        OrderStream::ALL
            .iter()
            .map(|stream| self.first_page(*stream))
            .collect()
    }

    /// Next page of the visible tab, if the server has more.
    pub fn next_page(&self) -> Option<Resource> {
        let next = match self.tab {
            OrderStream::Wallet => self.wallet.next_skip(),
            stream => self.orders(stream).and_then(OffsetPager::next_skip),
        };
        next.map(|skip| Resource::Orders {
            stream: self.tab,
            skip,
            limit: self.limit(),
        })
    }

    pub fn orders(&self, stream: OrderStream) -> Option<&OffsetPager<OrderItem>> {
        match stream {
            OrderStream::Gold => Some(&self.gold),
            OrderStream::Silver => Some(&self.silver),
            OrderStream::Ornaments => Some(&self.ornaments),
            OrderStream::Wallet => None,
        }
    }

    pub fn wallet(&self) -> &OffsetPager<WalletTransaction> {
        &self.wallet
    }

    pub fn total(&self, stream: OrderStream) -> u64 {
        match stream {
            OrderStream::Wallet => self.wallet.total(),
            stream => self.orders(stream).map_or(0, OffsetPager::total),
        }
    }

    /// Folds a settled page into its stream. Returns whether it applied.
    pub fn apply(&mut self, stream: OrderStream, skip: u32, data: &ResourceData) -> bool {
        match (stream, data) {
            (OrderStream::Gold, ResourceData::Orders(page)) => {
                self.gold.apply_page(skip, page.orders.clone(), page.total)
            }
            (OrderStream::Silver, ResourceData::Orders(page)) => {
                self.silver.apply_page(skip, page.orders.clone(), page.total)
            }
            (OrderStream::Ornaments, ResourceData::Orders(page)) => {
                self.ornaments
                    .apply_page(skip, page.orders.clone(), page.total)
            }
            (OrderStream::Wallet, ResourceData::Wallet(page)) => {
                self.wallet
                    .apply_page(skip, page.transactions.clone(), page.total)
            }
            _ => false,
        }
    }

    /// Drops a stream's accumulated rows after its first page failed.
    pub fn reset(&mut self, stream: OrderStream) {
        match stream {
            OrderStream::Gold => self.gold.reset(),
            OrderStream::Silver => self.silver.reset(),
            OrderStream::Ornaments => self.ornaments.reset(),
            OrderStream::Wallet => self.wallet.reset(),
        }
        if stream == self.tab {
            self.selected = 0;
        }
    }

    pub fn next_tab(&mut self) {
        let index = OrderStream::ALL
            .iter()
            .position(|stream| *stream == self.tab)
            .unwrap_or(0);
        self.tab = OrderStream::ALL[(index + 1) % OrderStream::ALL.len()];
        self.selected = 0;
    }

    pub fn prev_tab(&mut self) {
        let index = OrderStream::ALL
            .iter()
            .position(|stream| *stream == self.tab)
            .unwrap_or(0);
        let len = OrderStream::ALL.len();
        self.tab = OrderStream::ALL[(index + len - 1) % len];
        self.selected = 0;
    }

    pub fn row_count(&self) -> usize {
        match self.tab {
            OrderStream::Wallet => self.wallet.items().len(),
            stream => self.orders(stream).map_or(0, |pager| pager.items().len()),
        }
    }

    /// Ornament order under the cursor.
    pub fn selected_ornament(&self) -> Option<&OrderItem> {
        if self.tab != OrderStream::Ornaments {
            return None;
        }
        self.ornaments.items().get(self.selected)
    }
}

pub fn purchase_rows(orders: &[OrderItem]) -> Vec<Row<'static>> {
    orders
        .iter()
        .map(|order| {
            let status = order.status();
            Row::new(vec![
                Line::from(format::text(order.order_number.as_deref().or(Some(order.id.as_str())))),
                Line::from(format::text(order.user_id.as_deref())),
                Line::from(format::grams(order.metal_grams)),
                Line::from(format::currency(order.metal_price_per_gram)),
                Line::from(format::currency(order.amount)),
                Line::from(widgets::badge(status.label(), order_status_color(&status))),
                Line::from(format::date(order.created_at.as_deref())),
            ])
        })
        .collect()
}

pub const PURCHASE_HEADER: [&str; 7] = ["Order", "User", "Grams", "Rate", "Amount", "Status", "Date"];

pub const PURCHASE_WIDTHS: [Constraint; 7] = [
    Constraint::Percentage(18),
    Constraint::Percentage(16),
    Constraint::Percentage(10),
    Constraint::Percentage(12),
    Constraint::Percentage(14),
    Constraint::Percentage(14),
    Constraint::Percentage(16),
];

pub fn ornament_rows(orders: &[OrderItem]) -> Vec<Row<'static>> {
    orders
        .iter()
        .map(|order| {
            let status = order.status();
            let fulfillment = order.effective_fulfillment();
            Row::new(vec![
                Line::from(format::text(order.order_number.as_deref().or(Some(order.id.as_str())))),
                Line::from(order.product_name()),
                Line::from(order.product_quantity.unwrap_or(1).to_string()),
                Line::from(format::currency(order.amount)),
                Line::from(widgets::badge(status.label(), order_status_color(&status))),
                Line::from(widgets::badge(
                    fulfillment.label(),
                    fulfillment_color(&fulfillment),
                )),
                Line::from(format::date(order.created_at.as_deref())),
            ])
        })
        .collect()
}

pub const ORNAMENT_HEADER: [&str; 7] = [
    "Order",
    "Product",
    "Qty",
    "Amount",
    "Status",
    "Fulfillment",
    "Date",
];

pub const ORNAMENT_WIDTHS: [Constraint; 7] = [
    Constraint::Percentage(16),
    Constraint::Percentage(20),
    Constraint::Percentage(6),
    Constraint::Percentage(12),
    Constraint::Percentage(12),
    Constraint::Percentage(18),
    Constraint::Percentage(16),
];

pub fn wallet_rows(transactions: &[WalletTransaction]) -> Vec<Row<'static>> {
    transactions
        .iter()
        .map(|transaction| {
            let kind = transaction
                .transaction_type
                .as_ref()
                .map(|kind| widgets::badge(kind.label(), transaction_color(kind)))
                .unwrap_or_else(|| Span::raw(format::MISSING));
            Row::new(vec![
                Line::from(kind),
                Line::from(format::text(transaction.transaction_category.as_deref())),
                Line::from(format::currency(transaction.amount)),
                Line::from(format::currency(transaction.balance_before)),
                Line::from(format::currency(transaction.balance_after)),
                Line::from(format::text(transaction.description.as_deref())),
                Line::from(format::date(transaction.created_at.as_deref())),
            ])
        })
        .collect()
}

pub const WALLET_HEADER: [&str; 7] = [
    "Type",
    "Category",
    "Amount",
    "Before",
    "After",
    "Description",
    "Date",
];

pub const WALLET_WIDTHS: [Constraint; 7] = [
    Constraint::Percentage(10),
    Constraint::Percentage(14),
    Constraint::Percentage(12),
    Constraint::Percentage(12),
    Constraint::Percentage(12),
    Constraint::Percentage(24),
    Constraint::Percentage(16),
];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.orders_view();
    let (cards_area, rest) = split_top(area, 5);
    let cards = columns(cards_area, 4);
    let colors = [BRAND_GOLD, SILVER, STATUS_INFO, STATUS_OK];
    for ((card, stream), color) in cards.iter().zip(OrderStream::ALL).zip(colors) {
        let first = app.status(&view.first_page(stream));
        if first.is_loading() && view.total(stream) == 0 {
            widgets::skeleton(frame, *card, stream.label());
        } else if first.error().is_some() {
            widgets::stat_card(frame, *card, stream.label(), format::MISSING.to_string(), color);
        } else {
            widgets::stat_card(frame, *card, stream.label(), format::count(view.total(stream)), color);
        }
    }

    let failed = view
        .first_pages()
        .iter()
        .any(|resource| app.status(resource).error().is_some());
    let rest = if failed {
        let (banner, rest) = split_top(rest, 4);
        let lines = vec![
            Line::from(Span::styled(
                "Error loading data",
                Style::default().fg(STATUS_ERROR),
            )),
            Line::from(Span::styled(
                "Please try refreshing (r).",
                Style::default().fg(MUTED),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(widgets::panel("Orders")), banner);
        rest
    } else {
        rest
    };

    let (tabs_area, rest) = split_top(rest, 2);
    let selected_tab = OrderStream::ALL
        .iter()
        .position(|stream| *stream == view.tab)
        .unwrap_or(0);
    widgets::tabs(
        frame,
        tabs_area,
        OrderStream::ALL
            .iter()
            .map(|stream| stream.label().to_string())
            .collect(),
        selected_tab,
    );

    let (table_area, footer_area) = split_top(rest, rest.height.saturating_sub(1));
    let first = app.status(&view.first_page(view.tab));
    let title = view.tab.label();
    let selected = Some(view.selected);
    match view.tab {
        OrderStream::Wallet => widgets::list_region(
            frame,
            table_area,
            title,
            first.accumulated_view(view.wallet().items()),
            "No wallet transactions",
            |frame, area, items| {
                widgets::table(
                    frame,
                    area,
                    title,
                    &WALLET_HEADER,
                    &WALLET_WIDTHS,
                    wallet_rows(items),
                    selected,
                )
            },
        ),
        OrderStream::Ornaments => widgets::list_region(
            frame,
            table_area,
            title,
            first.accumulated_view(view.orders(view.tab).map(OffsetPager::items).unwrap_or_default()),
            "No ornament orders",
            |frame, area, items| {
                widgets::table(
                    frame,
                    area,
                    title,
                    &ORNAMENT_HEADER,
                    &ORNAMENT_WIDTHS,
                    ornament_rows(items),
                    selected,
                )
            },
        ),
        stream => widgets::list_region(
            frame,
            table_area,
            title,
            first.accumulated_view(view.orders(stream).map(OffsetPager::items).unwrap_or_default()),
            "No purchases",
            |frame, area, items| {
                widgets::table(
                    frame,
                    area,
                    title,
                    &PURCHASE_HEADER,
                    &PURCHASE_WIDTHS,
                    purchase_rows(items),
                    selected,
                )
            },
        ),
    }

    let next = view.next_page();
    let hint = if next.as_ref().is_some_and(|next| app.is_fetching(next)) {
        Span::styled(" Loading…", Style::default().fg(BRAND_GOLD))
    } else if next.is_some() {
        Span::styled(
            format!(
                " {} of {}  ·  m: Load more",
                view.row_count(),
                view.total(view.tab)
            ),
            Style::default().fg(BRAND_GOLD),
        )
    } else if view.tab == OrderStream::Ornaments {
        Span::styled(
            format!(" {} rows  ·  f: Advance fulfillment", view.row_count()),
            Style::default().fg(MUTED),
        )
    } else {
        Span::styled(format!(" {} rows", view.row_count()), Style::default().fg(MUTED))
    };
    frame.render_widget(Paragraph::new(Line::from(hint)), footer_area);
}
