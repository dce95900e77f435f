use serde::{Deserialize, Serialize};

use super::numeric;

wire_enum! {
    pub enum RefundState {
        Pending => "pending" | "initiated" | "processing",
        Completed => "completed" | "processed" | "success",
        Failed => "failed",
    }
}

impl Default for RefundState {
    fn default() -> Self {
        RefundState::Pending
    }
}

/// Body of a refund initiation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefundRequest {
    pub amount: f64,
    pub reason: String,
}

/// Returned when a refund is initiated or polled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundStatus {
    #[serde(alias = "order_id", deserialize_with = "numeric::id_string")]
    pub order_id: String,
    #[serde(default)]
    pub status: Option<RefundState>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub amount: Option<f64>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundHistory {
    #[serde(deserialize_with = "numeric::id_string")]
    pub id: String,
    #[serde(
        default,
        alias = "order_id",
        deserialize_with = "numeric::lenient_string"
    )]
    pub order_id: Option<String>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: Option<RefundState>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RefundListResponse {
    #[serde(default)]
    pub refunds: Vec<RefundHistory>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}
