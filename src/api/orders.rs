use reqwest::Method;
use serde::Serialize;

use crate::api::client::ApiClient;
use crate::api::error::ApiResult;
use crate::models::{
    FulfillmentStatus, MetalType, OrderListResponse, RedemptionListResponse,
    WalletTransactionListResponse,
};

/// Filters accepted by every order-like list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
}

impl OrderParams {
    pub fn page(skip: u32, limit: u32) -> Self {
        Self {
            skip: Some(skip),
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn for_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

#[derive(Serialize)]
struct FulfillmentBody<'a> {
    #[serde(rename = "fulfillmentStatus")]
    camel: &'a str,
    #[serde(rename = "fulfillment_status")]
    snake: &'a str,
}

pub struct OrdersApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi { client: self }
    }
}

impl OrdersApi<'_> {
    /// `GET /api/admin/payments/purchases/{gold|silver}`
    pub async fn purchases(
        &self,
        metal: MetalType,
        params: &OrderParams,
    ) -> ApiResult<OrderListResponse> {
        self.client
            .get(&format!("/api/admin/payments/purchases/{metal}"), params)
            .await
    }

    /// `GET /api/admin/payments/orders/ornaments`
    pub async fn ornament_orders(&self, params: &OrderParams) -> ApiResult<OrderListResponse> {
        self.client
            .get("/api/admin/payments/orders/ornaments", params)
            .await
    }

    /// `GET /api/admin/payments/wallet/transactions`
    pub async fn wallet_transactions(
        &self,
        params: &OrderParams,
    ) -> ApiResult<WalletTransactionListResponse> {
        self.client
            .get("/api/admin/payments/wallet/transactions", params)
            .await
    }

    /// `GET /api/admin/redemptions`
    pub async fn redemptions(&self, params: &OrderParams) -> ApiResult<RedemptionListResponse> {
        self.client.get("/api/admin/redemptions", params).await
    }

    /// `PATCH /api/admin/payments/orders/{id}/fulfillment-status`
    ///
    /// The status is sent under both spellings the backend has accepted.
    pub async fn update_fulfillment(
        &self,
        order_id: &str,
        status: &FulfillmentStatus,
    ) -> ApiResult<()> {
        tracing::info!(order_id, status = %status, "updating fulfillment status");
        let body = FulfillmentBody {
            camel: status.as_str(),
            snake: status.as_str(),
        };
        self.client
            .send_json_discard(
                Method::PATCH,
                &format!("/api/admin/payments/orders/{order_id}/fulfillment-status"),
                &body,
            )
            .await
    }
}
