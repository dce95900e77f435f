use std::fmt;

/// Cache key: a resource name followed by its parameters.
///
/// `["admin-orders-gold", "50"]` is matched by the prefix
/// `["admin-orders-gold"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new(root: impl Into<String>) -> Self {
        Self(vec![root.into()])
    }

    /// Appends a parameter segment.
    pub fn with(mut self, segment: impl ToString) -> Self {
        self.0.push(segment.to_string());
        self
    }

    pub fn root(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or_default()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Segment-wise prefix match.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_matching_is_segment_wise() {
        let key = QueryKey::new("admin-orders-gold").with(50);
        assert!(key.starts_with(&QueryKey::new("admin-orders-gold")));
        assert!(key.starts_with(&key));
        assert!(!key.starts_with(&QueryKey::new("admin-orders")));
        assert!(!QueryKey::new("admin-orders-gold").starts_with(&key));
    }

    #[test]
    fn display_lists_segments() {
        assert_eq!(
            QueryKey::new("admin-price-history").with("gold").to_string(),
            "[admin-price-history, gold]"
        );
    }
}
