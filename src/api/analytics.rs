use chrono::NaiveDate;
use serde::Serialize;

use crate::api::client::ApiClient;
use crate::api::error::ApiResult;
use crate::models::{AnalyticsDashboard, AnalyticsSummary, DashboardParams, PageParams, RefundListResponse};

#[derive(Serialize)]
struct RangeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<String>,
}

pub struct AnalyticsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn analytics(&self) -> AnalyticsApi<'_> {
        AnalyticsApi { client: self }
    }
}

impl AnalyticsApi<'_> {
    /// `GET /api/admin/analytics/summary`
    pub async fn summary(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> ApiResult<AnalyticsSummary> {
        let query = RangeQuery {
            start_date: start.map(|date| date.to_string()),
            end_date: end.map(|date| date.to_string()),
        };
        self.client
            .get("/api/admin/analytics/summary", &query)
            .await
    }

    /// `GET /api/admin/analytics/refunds`
    pub async fn refunds(&self, params: PageParams) -> ApiResult<RefundListResponse> {
        self.client.payments().refund_list(params).await
    }

    /// `GET /api/admin/analytics/dashboard`
    pub async fn dashboard(&self, params: &DashboardParams) -> ApiResult<AnalyticsDashboard> {
        self.client
            .get("/api/admin/analytics/dashboard", params)
            .await
    }
}
