use serde::{Deserialize, Serialize};

use super::numeric;

wire_enum! {
    /// KYC verification state of a platform user.
    pub enum KycStatus {
        Pending => "pending",
        Verified => "verified" | "approved",
        Rejected => "rejected",
    }
}

impl Default for KycStatus {
    fn default() -> Self {
        KycStatus::Pending
    }
}

/// Row of the users list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListItem {
    #[serde(deserialize_with = "numeric::id_string")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "first_name")]
    pub first_name: Option<String>,
    #[serde(default, alias = "last_name")]
    pub last_name: Option<String>,
    #[serde(
        default,
        alias = "phone_number",
        deserialize_with = "numeric::lenient_string"
    )]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "numeric::lenient_string")]
    pub aadhar: Option<String>,
    #[serde(default, alias = "referral_code")]
    pub referral_code: Option<String>,
    #[serde(default, alias = "kyc_status")]
    pub kyc_status: Option<KycStatus>,
    #[serde(
        default,
        alias = "gold_balance",
        deserialize_with = "numeric::lenient_f64"
    )]
    pub gold_balance: Option<f64>,
    #[serde(
        default,
        alias = "silver_balance",
        deserialize_with = "numeric::lenient_f64"
    )]
    pub silver_balance: Option<f64>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<String>,
}

impl UserListItem {
    /// "First Last", falling back to the email when no name is on file.
    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            self.email.clone()
        } else {
            name
        }
    }

    pub fn kyc(&self) -> KycStatus {
        self.kyc_status.clone().unwrap_or_default()
    }

    /// Case-insensitive match against email, first name, last name and phone.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            Some(self.email.as_str()),
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.phone_number.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserListResponse {
    #[serde(default)]
    pub users: Vec<UserListItem>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Balances {
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub gold: Option<f64>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub silver: Option<f64>,
}

/// Single user with balances and activity counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: UserListItem,
    #[serde(default)]
    pub balances: Balances,
    #[serde(default, alias = "total_orders")]
    pub total_orders: u64,
    #[serde(default, alias = "total_transactions")]
    pub total_transactions: u64,
}

impl UserDetail {
    /// Gold balance, preferring the nested balances block.
    pub fn gold(&self) -> f64 {
        self.balances
            .gold
            .or(self.user.gold_balance)
            .unwrap_or_default()
    }

    pub fn silver(&self) -> f64 {
        self.balances
            .silver
            .or(self.user.silver_balance)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_snake_and_camel_case() {
        let camel: UserListItem = serde_json::from_str(
            r#"{"id":"u1","email":"a@b.c","firstName":"Asha","kycStatus":"VERIFIED"}"#,
        )
        .unwrap();
        let snake: UserListItem = serde_json::from_str(
            r#"{"id":"u1","email":"a@b.c","first_name":"Asha","kyc_status":"verified"}"#,
        )
        .unwrap();
        assert_eq!(camel, snake);
        assert_eq!(camel.kyc(), KycStatus::Verified);
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let user: UserListItem =
            serde_json::from_str(r#"{"id":1,"email":"ops@bullion.in"}"#).unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.display_name(), "ops@bullion.in");
        assert_eq!(user.kyc(), KycStatus::Pending);
    }

    #[test]
    fn detail_prefers_nested_balances() {
        let detail: UserDetail = serde_json::from_str(
            r#"{"id":"u1","email":"x@y.z","goldBalance":"1.5",
                "balances":{"gold":"2.25","silver":null},"totalOrders":4}"#,
        )
        .unwrap();
        assert_eq!(detail.gold(), 2.25);
        assert_eq!(detail.silver(), 0.0);
        assert_eq!(detail.total_orders, 4);
    }
}
