use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::error::ApiResult;
use crate::models::{PageParams, Scheme, SchemeDraft, SchemeListResponse};

const SCHEMES: &str = "/api/admin/schemes";

pub struct SchemesApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn schemes(&self) -> SchemesApi<'_> {
        SchemesApi { client: self }
    }
}

impl SchemesApi<'_> {
    pub async fn list(&self, params: PageParams) -> ApiResult<SchemeListResponse> {
        self.client.get(SCHEMES, &params).await
    }

    pub async fn get(&self, scheme_id: &str) -> ApiResult<Scheme> {
        self.client.get_path(&format!("{SCHEMES}/{scheme_id}")).await
    }

    pub async fn create(&self, draft: &SchemeDraft) -> ApiResult<Scheme> {
        tracing::info!(name = %draft.name, "creating scheme");
        self.client.send_json(Method::POST, SCHEMES, draft).await
    }

    /// PATCH; `is_active` is included when set.
    pub async fn update(&self, scheme_id: &str, draft: &SchemeDraft) -> ApiResult<Scheme> {
        tracing::info!(scheme_id, "updating scheme");
        self.client
            .send_json(Method::PATCH, &format!("{SCHEMES}/{scheme_id}"), draft)
            .await
    }

    pub async fn delete(&self, scheme_id: &str) -> ApiResult<()> {
        tracing::info!(scheme_id, "deleting scheme");
        self.client.delete(&format!("{SCHEMES}/{scheme_id}")).await
    }
}
