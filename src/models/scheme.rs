use serde::{Deserialize, Serialize};

use super::numeric;

/// Investment scheme offered to customers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub terms_and_conditions: Option<String>,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl<'de> Deserialize<'de> for Scheme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawScheme::deserialize(deserializer)?;
        Ok(Scheme {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            terms_and_conditions: raw.terms_and_conditions,
            is_active: raw.is_active.unwrap_or(true),
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        })
    }
}

#[derive(Deserialize)]
struct RawScheme {
    #[serde(deserialize_with = "numeric::id_string")]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "termsAndConditions")]
    terms_and_conditions: Option<String>,
    #[serde(default, alias = "isActive")]
    is_active: Option<bool>,
    #[serde(default, alias = "createdAt")]
    created_at: Option<String>,
    #[serde(default, alias = "updatedAt")]
    updated_at: Option<String>,
}

/// Create/update payload. `is_active` is only sent on update.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_and_conditions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeListResponse {
    #[serde(default)]
    pub schemes: Vec<Scheme>,
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

    #[test]
    fn converts_snake_case_wire_format() {
        let scheme: Scheme = serde_json::from_str(
            r#"{"id":7,"name":"Gold Saver","terms_and_conditions":"T&C",
                "is_active":false,"created_at":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(scheme.id, "7");
        assert_eq!(scheme.terms_and_conditions.as_deref(), Some("T&C"));
        assert!(!scheme.is_active);

        let json = serde_json::to_value(&scheme).unwrap();
        assert_eq!(json["termsAndConditions"], "T&C");
        assert_eq!(json["isActive"], false);
    }

    #[test]
    fn draft_omits_unset_fields() {
        let draft = SchemeDraft {
            name: "Silver Plus".to_string(),
            ..SchemeDraft::default()
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            serde_json::json!({"name": "Silver Plus"})
        );
    }
}
