use crate::api::client::ApiClient;
use crate::api::error::ApiResult;
use crate::models::{PageParams, UserDetail, UserListResponse};

pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi { client: self }
    }
}

impl UsersApi<'_> {
    /// `GET /api/admin/users/`
    pub async fn list(&self, params: PageParams) -> ApiResult<UserListResponse> {
        self.client.get("/api/admin/users/", &params).await
    }

    /// `GET /api/admin/users/{id}`
    pub async fn get(&self, user_id: &str) -> ApiResult<UserDetail> {
        self.client
            .get_path(&format!("/api/admin/users/{user_id}"))
            .await
    }
}
