use serde::Deserialize;

/// `{status, message, data}` wrapper around every admin API response.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// True when the envelope itself reports a failure despite a 2xx status.
    pub fn is_failure(&self) -> bool {
        matches!(
            self.status.as_deref().map(str::to_ascii_lowercase).as_deref(),
            Some("error" | "fail" | "failed" | "failure")
        )
    }
}

/// Best-effort extraction of a human message from an error body.
///
/// Understands the envelope's `message`, FastAPI's `detail` (string or
/// validation list) and a bare `error` field.
pub fn error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let text = |key: &str| {
        value
            .get(key)
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
    };
    text("message")
        .or_else(|| text("detail"))
        .or_else(|| {
            value
                .get("detail")
                .and_then(serde_json::Value::as_array)
                .and_then(|items| items.first())
                .and_then(|item| item.get("msg"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .or_else(|| text("error"))
        .filter(|message| !message.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_status_is_case_insensitive() {
        let envelope: Envelope<()> =
            serde_json::from_str(r#"{"status":"ERROR","message":"nope","data":null}"#).unwrap();
        assert!(envelope.is_failure());
        let envelope: Envelope<u32> =
            serde_json::from_str(r#"{"status":"success","data":3}"#).unwrap();
        assert!(!envelope.is_failure());
        assert_eq!(envelope.data, Some(3));
    }

    #[test]
    fn error_message_reads_common_shapes() {
        assert_eq!(
            error_message(br#"{"status":"error","message":"Order not found"}"#).as_deref(),
            Some("Order not found")
        );
        assert_eq!(
            error_message(br#"{"detail":"Not authenticated"}"#).as_deref(),
            Some("Not authenticated")
        );
        assert_eq!(
            error_message(br#"{"detail":[{"loc":["body","amount"],"msg":"field required"}]}"#)
                .as_deref(),
            Some("field required")
        );
        assert_eq!(error_message(b"<html>"), None);
    }
}
