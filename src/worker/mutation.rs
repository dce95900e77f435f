use crate::api::{ApiClient, ApiError, ApiResult, ProductUploads};
use crate::models::{
    FulfillmentStatus, PriceUpdate, ProductDraft, ReferralConfig, RefundRequest, SchemeDraft,
};
use crate::query::QueryKey;

/// A write the console can issue.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    InitiateRefund {
        order_id: String,
        request: RefundRequest,
    },
    UpdatePrice(PriceUpdate),
    SetReferral(ReferralConfig),
    CreateScheme(SchemeDraft),
    UpdateScheme {
        id: String,
        draft: SchemeDraft,
    },
    DeleteScheme {
        id: String,
    },
    CreateProduct {
        draft: ProductDraft,
        uploads: ProductUploads,
    },
    UpdateProduct {
        id: String,
        draft: ProductDraft,
        uploads: ProductUploads,
    },
    DeleteProduct {
        id: String,
    },
    UpdateFulfillment {
        order_id: String,
        status: FulfillmentStatus,
    },
}

impl Mutation {
    /// Reads made stale when this write succeeds.
    pub fn invalidates(&self) -> Vec<QueryKey> {
        match self {
            Mutation::InitiateRefund { .. } => vec![QueryKey::new("admin-refunds")],
            Mutation::UpdatePrice(_) => vec![
                QueryKey::new("admin-price-gold"),
                QueryKey::new("admin-price-silver"),
                QueryKey::new("admin-price-history"),
            ],
            Mutation::SetReferral(config) => {
                vec![QueryKey::new(format!("admin-referrals-{}", config.metal_type))]
            }
            Mutation::CreateScheme(_) => vec![QueryKey::new("admin-schemes")],
            Mutation::UpdateScheme { id, .. } | Mutation::DeleteScheme { id } => vec![
                QueryKey::new("admin-schemes"),
                QueryKey::new("admin-scheme").with(id),
            ],
            Mutation::CreateProduct { .. }
            | Mutation::UpdateProduct { .. }
            | Mutation::DeleteProduct { .. } => vec![QueryKey::new("admin-products")],
            Mutation::UpdateFulfillment { .. } => vec![
                QueryKey::new("admin-orders-ornaments"),
                QueryKey::new("admin-ornament-orders"),
            ],
        }
    }

    /// Runs the request and returns the success notice.
    pub async fn apply(&self, api: &ApiClient) -> ApiResult<String> {
        match self {
            Mutation::InitiateRefund { order_id, request } => {
                let status = api.payments().initiate_refund(order_id, request).await?;
                let shown = if status.order_id.is_empty() {
                    order_id.as_str()
                } else {
                    status.order_id.as_str()
                };
                Ok(format!("Refund initiated successfully. Order: {shown}"))
            }
            Mutation::UpdatePrice(update) => {
                api.prices().update(update).await?;
                Ok("Price updated successfully".to_string())
            }
            Mutation::SetReferral(config) => {
                api.referrals().set_config(config).await?;
                Ok(format!(
                    "{} referral configuration saved",
                    config.metal_type.label()
                ))
            }
            Mutation::CreateScheme(draft) => {
                let scheme = api.schemes().create(draft).await?;
                Ok(format!("Scheme '{}' created", scheme.name))
            }
            Mutation::UpdateScheme { id, draft } => {
                api.schemes().update(id, draft).await?;
                Ok("Scheme updated".to_string())
            }
            Mutation::DeleteScheme { id } => {
                api.schemes().delete(id).await?;
                Ok("Scheme deleted".to_string())
            }
            Mutation::CreateProduct { draft, uploads } => {
                api.products().create(draft, uploads).await?;
                Ok("Product created successfully".to_string())
            }
            Mutation::UpdateProduct { id, draft, uploads } => {
                api.products().update(id, draft, uploads).await?;
                Ok("Product updated successfully".to_string())
            }
            Mutation::DeleteProduct { id } => {
                api.products().delete(id).await?;
                Ok("Product deleted successfully".to_string())
            }
            Mutation::UpdateFulfillment { order_id, status } => {
                api.orders().update_fulfillment(order_id, status).await?;
                Ok("Fulfillment status updated successfully".to_string())
            }
        }
    }

    /// Notice shown when the write fails.
    pub fn failure_message(&self, error: &ApiError) -> String {
        match self {
            Mutation::InitiateRefund { .. } => "Failed to initiate refund".to_string(),
            Mutation::UpdatePrice(_) => "Failed to update price".to_string(),
            Mutation::SetReferral(config) => format!(
                "Failed to save {} referral configuration",
                config.metal_type.as_str()
            ),
            Mutation::CreateScheme(_) => "Failed to create scheme".to_string(),
            Mutation::UpdateScheme { .. } => "Failed to update scheme".to_string(),
            Mutation::DeleteScheme { .. } => "Failed to delete scheme".to_string(),
            Mutation::CreateProduct { .. } => "Failed to create product".to_string(),
            Mutation::UpdateProduct { .. } => "Failed to update product".to_string(),
            Mutation::DeleteProduct { .. } => "Failed to delete product".to_string(),
            Mutation::UpdateFulfillment { .. } => match error {
                ApiError::Rejected { message } | ApiError::Status { message, .. }
                    if !message.is_empty() =>
                {
                    message.clone()
                }
                _ => "Failed to update fulfillment status".to_string(),
            },
        }
    }
}
