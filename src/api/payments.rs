use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::error::ApiResult;
use crate::models::{PageParams, RefundHistory, RefundListResponse, RefundRequest, RefundStatus};

pub struct PaymentsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn payments(&self) -> PaymentsApi<'_> {
        PaymentsApi { client: self }
    }
}

impl PaymentsApi<'_> {
    /// `POST /api/admin/payments/refund/{order_id}` with `{amount, reason}`.
    pub async fn initiate_refund(
        &self,
        order_id: &str,
        request: &RefundRequest,
    ) -> ApiResult<RefundStatus> {
        tracing::info!(order_id, amount = request.amount, "initiating refund");
        self.client
            .send_json(
                Method::POST,
                &format!("/api/admin/payments/refund/{order_id}"),
                request,
            )
            .await
    }

    /// `GET /api/admin/payments/refund/{order_id}/status`
    pub async fn refund_status(&self, order_id: &str) -> ApiResult<RefundStatus> {
        self.client
            .get_path(&format!("/api/admin/payments/refund/{order_id}/status"))
            .await
    }

    /// `GET /api/admin/payments/refunds`
    pub async fn refund_history(&self) -> ApiResult<Vec<RefundHistory>> {
        self.client.get_path("/api/admin/payments/refunds").await
    }

    /// `GET /api/admin/analytics/refunds`, paginated.
    pub async fn refund_list(&self, params: PageParams) -> ApiResult<RefundListResponse> {
        self.client
            .get("/api/admin/analytics/refunds", &params)
            .await
    }
}
