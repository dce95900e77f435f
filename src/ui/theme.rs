use ratatui::style::Color;

use crate::models::{
    FulfillmentStatus, KycStatus, MetalType, OrderStatus, ProductStatus, RedemptionStatus,
    RefundState, TransactionType,
};

pub const BRAND_GOLD: Color = Color::Rgb(0xd4, 0xa0, 0x17);
pub const SILVER: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_WARN: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const STATUS_INFO: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

/// Stock at or below this count shows as low.
pub const LOW_STOCK: i64 = 10;

pub fn order_status_color(status: &OrderStatus) -> Color {
    match status {
        OrderStatus::Completed => STATUS_OK,
        OrderStatus::Pending => STATUS_WARN,
        OrderStatus::Cancelled => STATUS_ERROR,
        OrderStatus::Refunded => STATUS_INFO,
        OrderStatus::Other(_) => MUTED,
    }
}

pub fn fulfillment_color(status: &FulfillmentStatus) -> Color {
    match status {
        FulfillmentStatus::Pending => STATUS_WARN,
        FulfillmentStatus::InProgress => STATUS_INFO,
        FulfillmentStatus::ReadyForPickup => BRAND_GOLD,
        FulfillmentStatus::PickedUp => STATUS_OK,
        FulfillmentStatus::Other(_) => MUTED,
    }
}

pub fn kyc_color(status: &KycStatus) -> Color {
    match status {
        KycStatus::Verified => STATUS_OK,
        KycStatus::Pending => STATUS_WARN,
        KycStatus::Rejected => STATUS_ERROR,
        KycStatus::Other(_) => MUTED,
    }
}

pub fn product_status_color(status: &ProductStatus) -> Color {
    match status {
        ProductStatus::Active => STATUS_OK,
        ProductStatus::Inactive => MUTED,
        ProductStatus::OutOfStock => STATUS_ERROR,
        ProductStatus::Other(_) => MUTED,
    }
}

pub fn metal_color(metal: MetalType) -> Color {
    match metal {
        MetalType::Gold => BRAND_GOLD,
        MetalType::Silver => SILVER,
    }
}

pub fn redemption_color(status: &RedemptionStatus) -> Color {
    match status {
        RedemptionStatus::Success => STATUS_OK,
        RedemptionStatus::Pending => STATUS_WARN,
        RedemptionStatus::Failed => STATUS_ERROR,
        RedemptionStatus::Other(_) => MUTED,
    }
}

pub fn refund_color(state: &RefundState) -> Color {
    match state {
        RefundState::Completed => STATUS_OK,
        RefundState::Pending => STATUS_WARN,
        RefundState::Failed => STATUS_ERROR,
        RefundState::Other(_) => MUTED,
    }
}

pub fn transaction_color(kind: &TransactionType) -> Color {
    match kind {
        TransactionType::Credit => STATUS_OK,
        TransactionType::Debit => STATUS_ERROR,
        TransactionType::Other(_) => MUTED,
    }
}

pub fn stock_color(stock: i64) -> Color {
    if stock <= 0 {
        STATUS_ERROR
    } else if stock < LOW_STOCK {
        STATUS_WARN
    } else {
        STATUS_OK
    }
}
