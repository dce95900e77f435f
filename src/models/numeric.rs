//! Lenient deserializers for backend fields whose JSON type drifts between
//! endpoints (numbers sent as strings, ids sent as integers).

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Text(String),
}

/// Parses a decimal the way the admin forms and the backend's string prices
/// expect: surrounding whitespace is ignored, non-finite values are rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Number, numeric string or null. Unparseable strings become `None`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Number(value)) => Some(value),
        Some(Loose::Text(text)) => parse_number(&text),
        None => None,
    })
}

/// Like [`lenient_f64`] but truncated to an integer count.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_f64(deserializer)?.map(|value| value as i64))
}

/// Identifier sent either as a string or as an integer.
pub fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Number(value) if value.fract() == 0.0 => format!("{}", value as i64),
        Loose::Number(value) => value.to_string(),
        Loose::Text(text) => text,
    })
}

/// Optional free-text field that may also arrive as a number.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Number(value)) if value.fract() == 0.0 => Some(format!("{}", value as i64)),
        Some(Loose::Number(value)) => Some(value.to_string()),
        Some(Loose::Text(text)) => Some(text),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "lenient_f64")]
        price: Option<f64>,
        #[serde(deserialize_with = "id_string")]
        id: String,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let sample: Sample = serde_json::from_str(r#"{"price": "6250.50", "id": 42}"#).unwrap();
        assert_eq!(sample.price, Some(6250.5));
        assert_eq!(sample.id, "42");

        let sample: Sample = serde_json::from_str(r#"{"price": 71, "id": "abc"}"#).unwrap();
        assert_eq!(sample.price, Some(71.0));
        assert_eq!(sample.id, "abc");
    }

    #[test]
    fn garbage_and_missing_become_none() {
        let sample: Sample = serde_json::from_str(r#"{"price": "n/a", "id": "x"}"#).unwrap();
        assert_eq!(sample.price, None);
        let sample: Sample = serde_json::from_str(r#"{"price": null, "id": "x"}"#).unwrap();
        assert_eq!(sample.price, None);
        let sample: Sample = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert_eq!(sample.price, None);
    }

    #[test]
    fn parse_number_rejects_blank_and_non_finite() {
        assert_eq!(parse_number(" 500 "), Some(500.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }
}
