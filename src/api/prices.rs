use chrono::NaiveDate;
use serde::Serialize;

use crate::api::client::ApiClient;
use crate::api::error::ApiResult;
use crate::models::{MetalPrice, MetalType, PriceHistoryEntry, PriceHistoryResponse, PriceUpdate};

pub struct PricesApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn prices(&self) -> PricesApi<'_> {
        PricesApi { client: self }
    }
}

#[derive(Serialize)]
struct MetalQuery {
    metal_type: MetalType,
}

#[derive(Serialize)]
struct HistoryQuery {
    metal_type: MetalType,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<String>,
}

#[derive(Serialize)]
struct UpdateQuery {
    metal_type: MetalType,
    price_per_gram: f64,
}

impl PricesApi<'_> {
    /// `GET /api/admin/prices/latest?metal_type=`
    pub async fn latest(&self, metal: MetalType) -> ApiResult<MetalPrice> {
        self.client
            .get("/api/admin/prices/latest", &MetalQuery { metal_type: metal })
            .await
    }

    /// Gold and silver fetched concurrently.
    pub async fn latest_all(&self) -> ApiResult<(MetalPrice, MetalPrice)> {
        let (gold, silver) = tokio::join!(
            self.latest(MetalType::Gold),
            self.latest(MetalType::Silver)
        );
        Ok((gold?, silver?))
    }

    /// `GET /api/admin/prices/history`, entries stamped with their metal.
    pub async fn history(
        &self,
        metal: MetalType,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> ApiResult<Vec<PriceHistoryEntry>> {
        let query = HistoryQuery {
            metal_type: metal,
            start_date: start.map(|date| date.format("%Y-%m-%d").to_string()),
            end_date: end.map(|date| date.format("%Y-%m-%d").to_string()),
        };
        let response: PriceHistoryResponse =
            self.client.get("/api/admin/prices/history", &query).await?;
        Ok(response.into_entries(metal))
    }

    /// `POST /api/admin/prices/?metal_type=&price_per_gram=`
    ///
    /// The backend stores a single per-gram price; the sell price is sent.
    pub async fn update(&self, update: &PriceUpdate) -> ApiResult<MetalPrice> {
        tracing::info!(
            metal = %update.metal_type,
            buy = update.buy_price,
            sell = update.sell_price,
            "updating metal price"
        );
        self.client
            .post_query(
                "/api/admin/prices/",
                &UpdateQuery {
                    metal_type: update.metal_type,
                    price_per_gram: update.sell_price,
                },
            )
            .await
    }
}
