//! Facet value that accepts both JSON strings and integers

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A categorical value as found in the question document.
///
/// Year-like facets are written as integers by some generators and as
/// strings by others. Matching always happens on the normalized string
/// form, so `2023` and `"2023"` are the same facet value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacetValue {
    Integer(i64),
    Text(String),
}

impl FacetValue {
    /// Normalized string form used for indexing and equality
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            FacetValue::Integer(n) => Cow::Owned(n.to_string()),
            FacetValue::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl std::fmt::Display for FacetValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FacetValue::Integer(n) => write!(f, "{}", n),
            FacetValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FacetValue {
    fn from(s: &str) -> Self {
        FacetValue::Text(s.to_string())
    }
}

impl From<String> for FacetValue {
    fn from(s: String) -> Self {
        FacetValue::Text(s)
    }
}

impl From<i64> for FacetValue {
    fn from(n: i64) -> Self {
        FacetValue::Integer(n)
    }
}

impl From<i32> for FacetValue {
    fn from(n: i32) -> Self {
        FacetValue::Integer(n.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_and_text_share_key() {
        let year: FacetValue = serde_json::from_str("2023").unwrap();
        let label: FacetValue = serde_json::from_str("\"2023\"").unwrap();
        assert_eq!(year, FacetValue::Integer(2023));
        assert_eq!(label, FacetValue::Text("2023".to_string()));
        assert_eq!(year.as_key(), label.as_key());
    }

    #[test]
    fn test_serializes_back_to_original_shape() {
        assert_eq!(serde_json::to_string(&FacetValue::Integer(2021)).unwrap(), "2021");
        assert_eq!(
            serde_json::to_string(&FacetValue::from("70th BPSC")).unwrap(),
            "\"70th BPSC\""
        );
    }
}
