use serde::{Deserialize, Serialize};

use super::numeric;
use super::refund::RefundListResponse;

/// Platform totals over a date range. Missing counters read as zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    #[serde(default, alias = "total_users")]
    pub total_users: u64,
    #[serde(default, alias = "total_orders")]
    pub total_orders: u64,
    #[serde(
        default,
        alias = "total_revenue",
        deserialize_with = "numeric::lenient_f64"
    )]
    pub total_revenue: Option<f64>,
    #[serde(default, alias = "total_refunds")]
    pub total_refunds: u64,
    #[serde(
        default,
        alias = "refunded_amount",
        deserialize_with = "numeric::lenient_f64"
    )]
    pub refunded_amount: Option<f64>,
    #[serde(
        default,
        alias = "gold_grams_sold",
        deserialize_with = "numeric::lenient_f64"
    )]
    pub gold_grams_sold: Option<f64>,
    #[serde(
        default,
        alias = "silver_grams_sold",
        deserialize_with = "numeric::lenient_f64"
    )]
    pub silver_grams_sold: Option<f64>,
}

/// Summary plus one page of recent refunds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyticsDashboard {
    #[serde(default)]
    pub summary: AnalyticsSummary,
    #[serde(default)]
    pub refunds: RefundListResponse,
}

/// Query parameters of the analytics dashboard endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_limit: Option<u32>,
}
