use serde::{Deserialize, Serialize};

use super::metal::MetalType;
use super::numeric;

/// Referral reward settings for one metal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralConfig {
    #[serde(alias = "metal_type")]
    pub metal_type: MetalType,
    #[serde(
        default,
        alias = "referrer_bonus",
        deserialize_with = "lenient_amount"
    )]
    pub referrer_bonus: f64,
    #[serde(default, alias = "referee_bonus", deserialize_with = "lenient_amount")]
    pub referee_bonus: f64,
    #[serde(
        default,
        alias = "min_investment",
        deserialize_with = "lenient_amount"
    )]
    pub min_investment: f64,
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(numeric::lenient_f64(deserializer)?.unwrap_or_default())
}
