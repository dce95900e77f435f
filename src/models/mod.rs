//! Records exchanged with the admin API.
//!
//! The backend mixes snake_case and camelCase and sometimes renames fields
//! between endpoints. Records accept both spellings; where whole fields are
//! renamed, a raw wire struct is normalized into the record the console uses.

/// Status-like string enum that tolerates unknown values.
///
/// Matching is case-insensitive and treats spaces and dashes as underscores.
/// Unknown values are preserved in `Other` so they can still be displayed.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $wire:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        $vis enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Other(raw) => raw.as_str(),
                }
            }

            /// Title-cased text for badges and tables.
            pub fn label(&self) -> String {
                $crate::models::title_case(self.as_str())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                let normalized = raw.trim().to_ascii_lowercase().replace([' ', '-'], "_");
                match normalized.as_str() {
                    $($wire $(| $alias)* => $name::$variant,)+
                    _ => $name::Other(raw),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                $name::from(raw.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod analytics;
pub mod metal;
pub mod numeric;
pub mod order;
pub mod price;
pub mod product;
pub mod redemption;
pub mod referral;
pub mod refund;
pub mod scheme;
pub mod user;
pub mod wallet;

pub use analytics::{AnalyticsDashboard, AnalyticsSummary, DashboardParams};
pub use metal::MetalType;
pub use order::{FulfillmentStatus, OrderItem, OrderListResponse, OrderStatus};
pub use price::{MetalPrice, PriceHistoryEntry, PriceHistoryResponse, PriceUpdate};
pub use product::{
    Category, CategoryDraft, Product, ProductDraft, ProductListResponse, ProductStatus,
};
pub use redemption::{Redemption, RedemptionListResponse, RedemptionStatus};
pub use referral::ReferralConfig;
pub use refund::{RefundHistory, RefundListResponse, RefundRequest, RefundState, RefundStatus};
pub use scheme::{Scheme, SchemeDraft, SchemeListResponse};
pub use user::{Balances, KycStatus, UserDetail, UserListItem, UserListResponse};
pub use wallet::{TransactionType, WalletTransaction, WalletTransactionListResponse};

/// `"ready_for_pickup"` → `"Ready For Pickup"`.
pub fn title_case(raw: &str) -> String {
    raw.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Query parameters shared by every skip/limit list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct PageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PageParams {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self {
            skip: Some(skip),
            limit: Some(limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_splits_on_underscores() {
        assert_eq!(title_case("ready_for_pickup"), "Ready For Pickup");
        assert_eq!(title_case("pending"), "Pending");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn wire_enum_is_case_insensitive_and_keeps_unknowns() {
        assert_eq!(OrderStatus::from("COMPLETED"), OrderStatus::Completed);
        assert_eq!(
            FulfillmentStatus::from("ready-for-pickup"),
            FulfillmentStatus::ReadyForPickup
        );
        let unknown = OrderStatus::from("on_hold");
        assert_eq!(unknown, OrderStatus::Other("on_hold".to_string()));
        assert_eq!(unknown.as_str(), "on_hold");
        assert_eq!(serde_json::to_string(&unknown).unwrap(), r#""on_hold""#);
    }
}
