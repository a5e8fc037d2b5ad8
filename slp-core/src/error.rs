//! Failure modes of a panel request.

use serde_json::Value;
use std::fmt;

/// Why a panel could not be populated from the analysis service.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (connection refused, CORS, DNS...).
    Network(String),
    /// The service answered with a non-success HTTP status.
    Status(u16),
    /// The body could not be read or was not valid JSON.
    Malformed(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {}", msg),
            FetchError::Status(code) => write!(f, "analysis service returned HTTP {}", code),
            FetchError::Malformed(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Parse a response body as JSON, keeping the document verbatim.
pub fn parse_body(body: &str) -> Result<Value, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_keeps_document() {
        let value = parse_body(r#"{"MarketTrends":["a","b"],"extra":1}"#).unwrap();
        assert_eq!(value["MarketTrends"][1], "b");
        assert_eq!(value["extra"], 1);
    }

    #[test]
    fn test_parse_body_rejects_garbage() {
        match parse_body("<html>oops</html>") {
            Err(FetchError::Malformed(_)) => {}
            other => panic!("expected malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            FetchError::Status(502).to_string(),
            "analysis service returned HTTP 502"
        );
    }
}
