use reqwest::multipart::{Form, Part};
use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::error::{ApiError, ApiResult};
use crate::models::{Category, CategoryDraft, PageParams, Product, ProductDraft, ProductListResponse};
use crate::validation::files::{UploadCandidate, UploadKind};

const PRODUCTS: &str = "/api/admin/products/";
const CATEGORIES: &str = "/api/admin/products/categories/";

/// Validated files attached to a product create/update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUploads {
    pub photos: Vec<UploadCandidate>,
    pub certificate: Option<UploadCandidate>,
}

pub struct ProductsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi { client: self }
    }
}

impl ProductsApi<'_> {
    /// `GET /api/admin/products/`
    pub async fn list(&self, params: PageParams) -> ApiResult<ProductListResponse> {
        self.client.get(PRODUCTS, &params).await
    }

    /// `GET /api/admin/products/{id}`
    pub async fn get(&self, product_id: &str) -> ApiResult<Product> {
        self.client.get_path(&format!("{PRODUCTS}{product_id}")).await
    }

    /// `POST /api/admin/products/` as multipart.
    pub async fn create(&self, draft: &ProductDraft, uploads: &ProductUploads) -> ApiResult<Product> {
        let form = build_form(draft, uploads).await?;
        tracing::info!(name = %draft.name, photos = uploads.photos.len(), "creating product");
        self.client
            .send_multipart(Method::POST, PRODUCTS, form)
            .await
    }

    /// `PUT /api/admin/products/{id}` as multipart.
    pub async fn update(
        &self,
        product_id: &str,
        draft: &ProductDraft,
        uploads: &ProductUploads,
    ) -> ApiResult<Product> {
        let form = build_form(draft, uploads).await?;
        tracing::info!(product_id, "updating product");
        self.client
            .send_multipart(Method::PUT, &format!("{PRODUCTS}{product_id}"), form)
            .await
    }

    /// `DELETE /api/admin/products/{id}`
    pub async fn delete(&self, product_id: &str) -> ApiResult<()> {
        tracing::info!(product_id, "deleting product");
        self.client.delete(&format!("{PRODUCTS}{product_id}")).await
    }

    /// `GET /api/admin/products/categories/`
    pub async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.client.get_path(CATEGORIES).await
    }

    /// `POST /api/admin/products/categories/`
    pub async fn create_category(&self, draft: &CategoryDraft) -> ApiResult<Category> {
        self.client.send_json(Method::POST, CATEGORIES, draft).await
    }
}

async fn build_form(draft: &ProductDraft, uploads: &ProductUploads) -> ApiResult<Form> {
    let mut form = Form::new();
    for (name, value) in draft.form_fields() {
        form = form.text(name, value);
    }
    for photo in &uploads.photos {
        form = form.part(UploadKind::ProductPhoto.field_name(), file_part(photo).await?);
    }
    if let Some(certificate) = &uploads.certificate {
        form = form.part(UploadKind::Certificate.field_name(), file_part(certificate).await?);
    }
    Ok(form)
}

async fn file_part(upload: &UploadCandidate) -> ApiResult<Part> {
    let bytes = tokio::fs::read(&upload.path)
        .await
        .map_err(|source| ApiError::Upload {
            path: upload.path.clone(),
            source,
        })?;
    Part::bytes(bytes)
        .file_name(upload.file_name.clone())
        .mime_str(&upload.mime)
        .map_err(|e| ApiError::Upload {
            path: upload.path.clone(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()),
        })
}
