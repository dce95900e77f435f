use serde::{Deserialize, Serialize};

use super::metal::MetalType;
use super::numeric;

/// Latest quoted price for one metal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetalPrice {
    pub id: Option<String>,
    pub metal_type: Option<MetalType>,
    pub buy_price: Option<f64>,
    pub sell_price: Option<f64>,
    pub price_per_gram: Option<f64>,
    pub timestamp: Option<String>,
}

impl MetalPrice {
    /// Price shown on cards: per-gram quote, else the sell price.
    pub fn headline(&self) -> Option<f64> {
        self.price_per_gram.or(self.sell_price)
    }
}

impl<'de> Deserialize<'de> for MetalPrice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawMetalPrice::deserialize(deserializer)?;
        Ok(MetalPrice {
            id: raw.id,
            metal_type: raw.metal_type.and_then(|metal| metal.parse().ok()),
            buy_price: raw.buy_price,
            sell_price: raw.sell_price,
            price_per_gram: raw.price_per_gram,
            timestamp: raw
                .updated_at
                .or(raw.created_at)
                .or(raw.timestamp)
                .or(raw.date),
        })
    }
}

#[derive(Deserialize)]
struct RawMetalPrice {
    #[serde(default, deserialize_with = "numeric::lenient_string")]
    id: Option<String>,
    #[serde(default, alias = "metalType")]
    metal_type: Option<String>,
    #[serde(default, alias = "buyPrice", deserialize_with = "numeric::lenient_f64")]
    buy_price: Option<f64>,
    #[serde(default, alias = "sellPrice", deserialize_with = "numeric::lenient_f64")]
    sell_price: Option<f64>,
    #[serde(
        default,
        alias = "pricePerGram",
        deserialize_with = "numeric::lenient_f64"
    )]
    price_per_gram: Option<f64>,
    #[serde(default, alias = "updatedAt")]
    updated_at: Option<String>,
    #[serde(default, alias = "createdAt")]
    created_at: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default)]
    date: Option<String>,
}

/// One point of the price history chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistoryEntry {
    pub date: String,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub price: Option<f64>,
    #[serde(default, alias = "metal_type")]
    pub metal_type: Option<MetalType>,
}

/// `{metal_type, data: [...]}` as returned by the history endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceHistoryResponse {
    #[serde(default, alias = "metalType")]
    pub metal_type: Option<String>,
    #[serde(default)]
    pub data: Vec<PriceHistoryEntry>,
}

impl PriceHistoryResponse {
    /// Entries stamped with the metal they were requested for.
    pub fn into_entries(self, requested: MetalType) -> Vec<PriceHistoryEntry> {
        let metal = self
            .metal_type
            .and_then(|metal| metal.parse().ok())
            .unwrap_or(requested);
        self.data
            .into_iter()
            .map(|entry| PriceHistoryEntry {
                metal_type: Some(metal),
                ..entry
            })
            .collect()
    }
}

/// Operator-entered price change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceUpdate {
    pub metal_type: MetalType,
    pub buy_price: f64,
    pub sell_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_falls_back_through_known_fields() {
        let price: MetalPrice = serde_json::from_str(
            r#"{"metal_type":"gold","price_per_gram":"6450.75","created_at":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(price.metal_type, Some(MetalType::Gold));
        assert_eq!(price.price_per_gram, Some(6450.75));
        assert_eq!(price.timestamp.as_deref(), Some("2024-05-01T10:00:00Z"));

        let price: MetalPrice =
            serde_json::from_str(r#"{"pricePerGram":80,"date":"2024-05-02"}"#).unwrap();
        assert_eq!(price.headline(), Some(80.0));
        assert_eq!(price.timestamp.as_deref(), Some("2024-05-02"));
    }

    #[test]
    fn history_entries_carry_requested_metal() {
        let response: PriceHistoryResponse = serde_json::from_str(
            r#"{"data":[{"date":"2024-05-01","price":"6400"},{"date":"2024-05-02","price":6410}]}"#,
        )
        .unwrap();
        let entries = response.into_entries(MetalType::Silver);
        assert_eq!(entries.len(), 2);
        assert!(entries
            .iter()
            .all(|entry| entry.metal_type == Some(MetalType::Silver)));
        assert_eq!(entries[0].price, Some(6400.0));
    }
}
