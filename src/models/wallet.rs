use serde::{Deserialize, Serialize};

use super::numeric;

wire_enum! {
    pub enum TransactionType {
        Credit => "credit",
        Debit => "debit",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransaction {
    #[serde(deserialize_with = "numeric::id_string")]
    pub id: String,
    #[serde(
        default,
        alias = "user_id",
        deserialize_with = "numeric::lenient_string"
    )]
    pub user_id: Option<String>,
    #[serde(default, alias = "transaction_type")]
    pub transaction_type: Option<TransactionType>,
    #[serde(default, alias = "transaction_category")]
    pub transaction_category: Option<String>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub amount: Option<f64>,
    #[serde(
        default,
        alias = "balance_before",
        deserialize_with = "numeric::lenient_f64"
    )]
    pub balance_before: Option<f64>,
    #[serde(
        default,
        alias = "balance_after",
        deserialize_with = "numeric::lenient_f64"
    )]
    pub balance_after: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletTransactionListResponse {
    #[serde(default)]
    pub transactions: Vec<WalletTransaction>,
    #[serde(default)]
    pub total: u64,
}
