use serde::{Deserialize, Serialize};

use super::numeric;

wire_enum! {
    pub enum RedemptionStatus {
        Pending => "pending" | "processing",
        Success => "success" | "completed",
        Failed => "failed",
    }
}

impl Default for RedemptionStatus {
    fn default() -> Self {
        RedemptionStatus::Pending
    }
}

/// Metal sold back to the platform for a bank payout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Redemption {
    #[serde(deserialize_with = "numeric::id_string")]
    pub id: String,
    #[serde(
        default,
        alias = "user_id",
        deserialize_with = "numeric::lenient_string"
    )]
    pub user_id: Option<String>,
    #[serde(default, alias = "metal_type")]
    pub metal_type: Option<String>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub grams: Option<f64>,
    #[serde(
        default,
        alias = "price_per_gram",
        deserialize_with = "numeric::lenient_f64"
    )]
    pub price_per_gram: Option<f64>,
    #[serde(
        default,
        alias = "total_amount",
        deserialize_with = "numeric::lenient_f64"
    )]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub status: Option<RedemptionStatus>,
    #[serde(default, alias = "bank_name")]
    pub bank_name: Option<String>,
    #[serde(
        default,
        alias = "account_number",
        deserialize_with = "numeric::lenient_string"
    )]
    pub account_number: Option<String>,
    #[serde(default, alias = "account_holder_name")]
    pub account_holder_name: Option<String>,
    #[serde(default, alias = "ifsc_code")]
    pub ifsc_code: Option<String>,
    #[serde(default, alias = "failure_reason")]
    pub failure_reason: Option<String>,
    #[serde(default, alias = "processed_at")]
    pub processed_at: Option<String>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
}

impl Redemption {
    /// Account number with all but the last four digits hidden.
    pub fn masked_account(&self) -> Option<String> {
        let account = self.account_number.as_deref()?.trim();
        let chars: Vec<char> = account.chars().collect();
        if chars.len() <= 4 {
            return Some(account.to_string());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        Some(format!("{}{}", "•".repeat(chars.len() - 4), visible))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedemptionListResponse {
    #[serde(default)]
    pub redemptions: Vec<Redemption>,
    #[serde(default)]
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_account_number() {
        let redemption: Redemption =
            serde_json::from_str(r#"{"id":"r1","account_number":123456789012}"#).unwrap();
        assert_eq!(
            redemption.masked_account().as_deref(),
            Some("••••••••9012")
        );
        let short: Redemption =
            serde_json::from_str(r#"{"id":"r1","accountNumber":"123"}"#).unwrap();
        assert_eq!(short.masked_account().as_deref(), Some("123"));
    }
}
