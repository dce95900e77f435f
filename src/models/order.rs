use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::numeric;

wire_enum! {
    pub enum OrderStatus {
        Pending => "pending",
        Completed => "completed" | "success",
        Cancelled => "cancelled" | "canceled",
        Refunded => "refunded",
    }
}

wire_enum! {
    /// Pickup progress of an ornament order.
    pub enum FulfillmentStatus {
        Pending => "pending",
        InProgress => "in_progress",
        ReadyForPickup => "ready_for_pickup",
        PickedUp => "picked_up",
    }
}

impl Default for FulfillmentStatus {
    fn default() -> Self {
        FulfillmentStatus::Pending
    }
}

impl FulfillmentStatus {
    /// Statuses an operator can assign, in pipeline order.
    pub const PIPELINE: [FulfillmentStatus; 4] = [
        FulfillmentStatus::Pending,
        FulfillmentStatus::InProgress,
        FulfillmentStatus::ReadyForPickup,
        FulfillmentStatus::PickedUp,
    ];

    /// Next stage of the pipeline; `PickedUp` and unknown values stay put.
    pub fn next(&self) -> FulfillmentStatus {
        match self {
            FulfillmentStatus::Pending => FulfillmentStatus::InProgress,
            FulfillmentStatus::InProgress => FulfillmentStatus::ReadyForPickup,
            FulfillmentStatus::ReadyForPickup | FulfillmentStatus::PickedUp => {
                FulfillmentStatus::PickedUp
            }
            FulfillmentStatus::Other(raw) => FulfillmentStatus::Other(raw.clone()),
        }
    }
}

/// Purchase or ornament order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(deserialize_with = "numeric::id_string")]
    pub id: String,
    #[serde(
        default,
        alias = "order_number",
        deserialize_with = "numeric::lenient_string"
    )]
    pub order_number: Option<String>,
    #[serde(
        default,
        alias = "user_id",
        deserialize_with = "numeric::lenient_string"
    )]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub amount: Option<f64>,
    #[serde(
        default,
        alias = "discount_amount",
        deserialize_with = "numeric::lenient_f64"
    )]
    pub discount_amount: Option<f64>,
    #[serde(default, alias = "metal_type")]
    pub metal_type: Option<String>,
    #[serde(
        default,
        alias = "metal_grams",
        deserialize_with = "numeric::lenient_f64"
    )]
    pub metal_grams: Option<f64>,
    #[serde(
        default,
        alias = "metal_price_per_gram",
        deserialize_with = "numeric::lenient_f64"
    )]
    pub metal_price_per_gram: Option<f64>,
    #[serde(
        default,
        alias = "product_quantity",
        deserialize_with = "numeric::lenient_i64"
    )]
    pub product_quantity: Option<i64>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default, alias = "fulfillment_status")]
    pub fulfillment_status: Option<FulfillmentStatus>,
    #[serde(default, alias = "order_metadata")]
    pub order_metadata: Option<Map<String, Value>>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
}

impl OrderItem {
    /// Resolves where the backend put the fulfillment status.
    ///
    /// Order: top-level field, metadata `fulfillmentStatus`, metadata
    /// `fulfillment_status`, any metadata key mentioning "fulfillment",
    /// then `pending`.
    pub fn effective_fulfillment(&self) -> FulfillmentStatus {
        if let Some(status) = &self.fulfillment_status {
            return status.clone();
        }
        let Some(metadata) = &self.order_metadata else {
            return FulfillmentStatus::default();
        };
        let text = |key: &str| metadata.get(key).and_then(Value::as_str);

        text("fulfillmentStatus")
            .or_else(|| text("fulfillment_status"))
            .or_else(|| {
                metadata
                    .iter()
                    .filter(|(key, _)| key.to_lowercase().contains("fulfillment"))
                    .find_map(|(_, value)| value.as_str())
            })
            .map(FulfillmentStatus::from)
            .unwrap_or_default()
    }

    /// Ornament name from the order metadata.
    pub fn product_name(&self) -> String {
        self.order_metadata
            .as_ref()
            .and_then(|metadata| {
                metadata
                    .get("productName")
                    .or_else(|| metadata.get("product_name"))
            })
            .and_then(Value::as_str)
            .unwrap_or("Product")
            .to_string()
    }

    pub fn status(&self) -> OrderStatus {
        self.status.clone().unwrap_or(OrderStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderListResponse {
    #[serde(default)]
    pub orders: Vec<OrderItem>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(json: &str) -> OrderItem {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn fulfillment_prefers_top_level_field() {
        let item = order(
            r#"{"id":"o1","fulfillmentStatus":"picked_up",
                "orderMetadata":{"fulfillmentStatus":"pending"}}"#,
        );
        assert_eq!(item.effective_fulfillment(), FulfillmentStatus::PickedUp);
    }

    #[test]
    fn fulfillment_falls_back_through_metadata() {
        let camel = order(r#"{"id":"o1","orderMetadata":{"fulfillmentStatus":"in_progress"}}"#);
        assert_eq!(camel.effective_fulfillment(), FulfillmentStatus::InProgress);

        let snake = order(r#"{"id":"o1","order_metadata":{"fulfillment_status":"ready_for_pickup"}}"#);
        assert_eq!(
            snake.effective_fulfillment(),
            FulfillmentStatus::ReadyForPickup
        );

        let loose = order(r#"{"id":"o1","orderMetadata":{"lastFulfillmentUpdate":"picked_up"}}"#);
        assert_eq!(loose.effective_fulfillment(), FulfillmentStatus::PickedUp);

        let bare = order(r#"{"id":"o1"}"#);
        assert_eq!(bare.effective_fulfillment(), FulfillmentStatus::Pending);
    }

    #[test]
    fn product_name_from_metadata() {
        let item = order(r#"{"id":"o1","orderMetadata":{"product_name":"Kada"}}"#);
        assert_eq!(item.product_name(), "Kada");
        assert_eq!(order(r#"{"id":"o1"}"#).product_name(), "Product");
    }

    #[test]
    fn pipeline_advances_and_stops() {
        assert_eq!(
            FulfillmentStatus::Pending.next(),
            FulfillmentStatus::InProgress
        );
        assert_eq!(
            FulfillmentStatus::PickedUp.next(),
            FulfillmentStatus::PickedUp
        );
    }
}
