use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::error::ApiResult;
use crate::models::{MetalType, ReferralConfig};

pub struct ReferralsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn referrals(&self) -> ReferralsApi<'_> {
        ReferralsApi { client: self }
    }
}

impl ReferralsApi<'_> {
    /// `GET /api/admin/referrals/config/{metal}`
    pub async fn config(&self, metal: MetalType) -> ApiResult<ReferralConfig> {
        self.client
            .get_path(&format!("/api/admin/referrals/config/{metal}"))
            .await
    }

    /// `POST /api/admin/referrals/config`
    pub async fn set_config(&self, config: &ReferralConfig) -> ApiResult<ReferralConfig> {
        tracing::info!(metal = %config.metal_type, "saving referral config");
        self.client
            .send_json(Method::POST, "/api/admin/referrals/config", config)
            .await
    }
}
