use std::fmt;
use std::str::FromStr;

use chrono::{Duration, Utc};

use crate::api::{ApiClient, ApiResult, OrderParams};
use crate::models::{
    MetalPrice, MetalType, OrderListResponse, PageParams, PriceHistoryEntry, ProductListResponse,
    RedemptionListResponse, ReferralConfig, RefundListResponse, Scheme, SchemeListResponse, UserDetail,
    UserListResponse, WalletTransactionListResponse,
};
use crate::query::QueryKey;

/// Days of price history shown per metal.
pub const HISTORY_DAYS: i64 = 30;

/// One of the four order streams on the orders screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStream {
    Gold,
    Silver,
    Ornaments,
    Wallet,
}

impl OrderStream {
    pub const ALL: [OrderStream; 4] = [
        OrderStream::Gold,
        OrderStream::Silver,
        OrderStream::Ornaments,
        OrderStream::Wallet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStream::Gold => "gold",
            OrderStream::Silver => "silver",
            OrderStream::Ornaments => "ornaments",
            OrderStream::Wallet => "wallet",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStream::Gold => "Gold Purchases",
            OrderStream::Silver => "Silver Purchases",
            OrderStream::Ornaments => "Ornament Orders",
            OrderStream::Wallet => "Wallet Transactions",
        }
    }

    fn key_root(self) -> &'static str {
        match self {
            OrderStream::Gold => "admin-orders-gold",
            OrderStream::Silver => "admin-orders-silver",
            OrderStream::Ornaments => "admin-orders-ornaments",
            OrderStream::Wallet => "admin-wallet-transactions",
        }
    }
}

impl FromStr for OrderStream {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "gold" => Ok(OrderStream::Gold),
            "silver" => Ok(OrderStream::Silver),
            "ornaments" | "ornament" => Ok(OrderStream::Ornaments),
            "wallet" => Ok(OrderStream::Wallet),
            other => Err(format!(
                "unknown order stream '{other}' (expected gold, silver, ornaments or wallet)"
            )),
        }
    }
}

impl fmt::Display for OrderStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-user history tabs on the user detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UserTab {
    #[default]
    GoldPurchases,
    SilverPurchases,
    OrnamentOrders,
    WalletTransactions,
    Redemptions,
}

impl UserTab {
    pub const ALL: [UserTab; 5] = [
        UserTab::GoldPurchases,
        UserTab::SilverPurchases,
        UserTab::OrnamentOrders,
        UserTab::WalletTransactions,
        UserTab::Redemptions,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UserTab::GoldPurchases => "Gold",
            UserTab::SilverPurchases => "Silver",
            UserTab::OrnamentOrders => "Ornaments",
            UserTab::WalletTransactions => "Wallet",
            UserTab::Redemptions => "Redemptions",
        }
    }

    fn key_root(self) -> &'static str {
        match self {
            UserTab::GoldPurchases => "admin-gold-purchases",
            UserTab::SilverPurchases => "admin-silver-purchases",
            UserTab::OrnamentOrders => "admin-ornament-orders",
            UserTab::WalletTransactions => "admin-user-wallet-transactions",
            UserTab::Redemptions => "admin-redemptions",
        }
    }
}

/// A read the console can request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    Users { limit: u32 },
    User { id: String },
    UserHistory { user_id: String, tab: UserTab, limit: u32 },
    Products { limit: u32 },
    LatestPrice(MetalType),
    PriceHistory(MetalType),
    Refunds { skip: u32, limit: u32 },
    Orders { stream: OrderStream, skip: u32, limit: u32 },
    Referral(MetalType),
    Schemes { skip: u32, limit: u32 },
    Scheme { id: String },
}

/// Payload of a settled read.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceData {
    Users(UserListResponse),
    User(Box<UserDetail>),
    Orders(OrderListResponse),
    Wallet(WalletTransactionListResponse),
    Redemptions(RedemptionListResponse),
    Products(ProductListResponse),
    Price(MetalPrice),
    PriceHistory(Vec<PriceHistoryEntry>),
    Refunds(RefundListResponse),
    Referral(ReferralConfig),
    Schemes(SchemeListResponse),
    Scheme(Scheme),
}

impl Resource {
    pub fn key(&self) -> QueryKey {
        match self {
            Resource::Users { limit } => QueryKey::new("admin-users").with(limit),
            Resource::User { id } => QueryKey::new("admin-user").with(id),
            Resource::UserHistory { user_id, tab, .. } => {
                QueryKey::new(tab.key_root()).with(user_id)
            }
            Resource::Products { limit } => QueryKey::new("admin-products").with(limit),
            Resource::LatestPrice(MetalType::Gold) => QueryKey::new("admin-price-gold"),
            Resource::LatestPrice(MetalType::Silver) => QueryKey::new("admin-price-silver"),
            Resource::PriceHistory(metal) => QueryKey::new("admin-price-history").with(metal),
            Resource::Refunds { skip, limit } => {
                QueryKey::new("admin-refunds").with(skip).with(limit)
            }
            Resource::Orders { stream, skip, .. } => QueryKey::new(stream.key_root()).with(skip),
            Resource::Referral(metal) => QueryKey::new(format!("admin-referrals-{metal}")),
            Resource::Schemes { skip, limit } => {
                QueryKey::new("admin-schemes").with(skip).with(limit)
            }
            Resource::Scheme { id } => QueryKey::new("admin-scheme").with(id),
        }
    }

    /// Issues the request behind this read.
    pub async fn load(&self, api: &ApiClient) -> ApiResult<ResourceData> {
        match self {
            Resource::Users { limit } => api
                .users()
                .list(PageParams::new(0, *limit))
                .await
                .map(ResourceData::Users),
            Resource::User { id } => api
                .users()
                .get(id)
                .await
                .map(|detail| ResourceData::User(Box::new(detail))),
            Resource::UserHistory {
                user_id,
                tab,
                limit,
            } => {
                let params = OrderParams::page(0, *limit).for_user(user_id.as_str());
                let orders = api.orders();
                match tab {
                    UserTab::GoldPurchases => orders
                        .purchases(MetalType::Gold, &params)
                        .await
                        .map(ResourceData::Orders),
                    UserTab::SilverPurchases => orders
                        .purchases(MetalType::Silver, &params)
                        .await
                        .map(ResourceData::Orders),
                    UserTab::OrnamentOrders => orders
                        .ornament_orders(&params)
                        .await
                        .map(ResourceData::Orders),
                    UserTab::WalletTransactions => orders
                        .wallet_transactions(&params)
                        .await
                        .map(ResourceData::Wallet),
                    UserTab::Redemptions => orders
                        .redemptions(&params)
                        .await
                        .map(ResourceData::Redemptions),
                }
            }
            Resource::Products { limit } => api
                .products()
                .list(PageParams::new(0, *limit))
                .await
                .map(ResourceData::Products),
            Resource::LatestPrice(metal) => {
                api.prices().latest(*metal).await.map(ResourceData::Price)
            }
            Resource::PriceHistory(metal) => {
                let start = Utc::now().date_naive() - Duration::days(HISTORY_DAYS);
                api.prices()
                    .history(*metal, Some(start), None)
                    .await
                    .map(ResourceData::PriceHistory)
            }
            Resource::Refunds { skip, limit } => api
                .payments()
                .refund_list(PageParams::new(*skip, *limit))
                .await
                .map(ResourceData::Refunds),
            Resource::Orders {
                stream,
                skip,
                limit,
            } => {
                let params = OrderParams::page(*skip, *limit);
                let orders = api.orders();
                match stream {
                    OrderStream::Gold => orders
                        .purchases(MetalType::Gold, &params)
                        .await
                        .map(ResourceData::Orders),
                    OrderStream::Silver => orders
                        .purchases(MetalType::Silver, &params)
                        .await
                        .map(ResourceData::Orders),
                    OrderStream::Ornaments => orders
                        .ornament_orders(&params)
                        .await
                        .map(ResourceData::Orders),
                    OrderStream::Wallet => orders
                        .wallet_transactions(&params)
                        .await
                        .map(ResourceData::Wallet),
                }
            }
            Resource::Referral(metal) => api
                .referrals()
                .config(*metal)
                .await
                .map(ResourceData::Referral),
            Resource::Schemes { skip, limit } => api
                .schemes()
                .list(PageParams::new(*skip, *limit))
                .await
                .map(ResourceData::Schemes),
            Resource::Scheme { id } => api.schemes().get(id).await.map(ResourceData::Scheme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_share_roots_for_invalidation() {
        let first = Resource::Orders {
            stream: OrderStream::Ornaments,
            skip: 0,
            limit: 50,
        };
        let second = Resource::Orders {
            stream: OrderStream::Ornaments,
            skip: 50,
            limit: 50,
        };
        let root = QueryKey::new("admin-orders-ornaments");
        assert!(first.key().starts_with(&root));
        assert!(second.key().starts_with(&root));
        assert_ne!(first.key(), second.key());
    }

    #[test]
    fn dashboard_and_list_reads_do_not_collide() {
        let dashboard = Resource::Users { limit: 1 }.key();
        let list = Resource::Users { limit: 100 }.key();
        assert_ne!(dashboard, list);
        assert!(list.starts_with(&QueryKey::new("admin-users")));
    }

    #[test]
    fn referral_key_is_per_metal() {
        assert_eq!(
            Resource::Referral(MetalType::Silver).key(),
            QueryKey::new("admin-referrals-silver")
        );
    }

    #[test]
    fn scheme_detail_is_not_under_the_list_root() {
        let detail = Resource::Scheme {
            id: "s1".to_string(),
        }
        .key();
        assert_eq!(detail.to_string(), "[admin-scheme, s1]");
        assert!(!detail.starts_with(&QueryKey::new("admin-schemes")));
    }

    #[test]
    fn order_stream_parses_aliases() {
        assert_eq!("Ornament".parse::<OrderStream>(), Ok(OrderStream::Ornaments));
        assert!("leasing".parse::<OrderStream>().is_err());
    }
}
