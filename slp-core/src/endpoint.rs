//! Analysis service endpoints and the shared request contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// One fixed URL of the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Market,
    BrandingImages,
    BrandingText,
    Outreach,
    Pricing,
}

impl Endpoint {
    pub const ALL: [Endpoint; 5] = [
        Endpoint::Market,
        Endpoint::BrandingImages,
        Endpoint::BrandingText,
        Endpoint::Outreach,
        Endpoint::Pricing,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Market => "/market",
            Endpoint::BrandingImages => "/branding/images",
            Endpoint::BrandingText => "/branding/text",
            Endpoint::Outreach => "/outreach",
            Endpoint::Pricing => "/pricing",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Market => "market",
            Endpoint::BrandingImages => "branding_images",
            Endpoint::BrandingText => "branding_text",
            Endpoint::Outreach => "outreach",
            Endpoint::Pricing => "pricing",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Endpoint::ALL
            .into_iter()
            .find(|e| e.name() == wanted)
            .ok_or_else(|| anyhow::anyhow!("unknown endpoint: {}", s))
    }
}

/// Where the analysis service lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full URL for an endpoint. Trailing slashes on the base are ignored.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }
}

/// JSON body sent to every endpoint: `{"idea": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub idea: String,
}

impl AnalysisRequest {
    pub fn new(idea: impl Into<String>) -> Self {
        Self { idea: idea.into() }
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({ "idea": self.idea }).to_string()
    }
}

/// How a panel should obtain its data for the current inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPlan {
    /// Use the bundled sample document.
    Sample,
    /// Issue one request to the endpoint.
    Fetch,
    /// Nothing to ask for yet (empty idea).
    Idle,
}

impl LoadPlan {
    pub fn choose(idea: &str, demo: bool) -> Self {
        if demo {
            LoadPlan::Sample
        } else if idea.trim().is_empty() {
            LoadPlan::Idle
        } else {
            LoadPlan::Fetch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_cleanly() {
        let config = ApiConfig::new("http://localhost:5000/");
        assert_eq!(config.url(Endpoint::BrandingText), "http://localhost:5000/branding/text");
        assert_eq!(
            ApiConfig::default().url(Endpoint::Market),
            "http://127.0.0.1:5000/market"
        );
    }

    #[test]
    fn test_request_body() {
        let body = AnalysisRequest::new("honey \"coffee\"").to_json();
        let parsed: AnalysisRequest = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.idea, "honey \"coffee\"");
    }

    #[test]
    fn test_load_plan() {
        assert_eq!(LoadPlan::choose("anything", true), LoadPlan::Sample);
        assert_eq!(LoadPlan::choose("", true), LoadPlan::Sample);
        assert_eq!(LoadPlan::choose("  ", false), LoadPlan::Idle);
        assert_eq!(LoadPlan::choose("honey coffee", false), LoadPlan::Fetch);
    }

    #[test]
    fn test_endpoint_names_parse() {
        for endpoint in Endpoint::ALL {
            assert_eq!(endpoint.name().parse::<Endpoint>().unwrap(), endpoint);
        }
        assert_eq!("branding-images".parse::<Endpoint>().unwrap(), Endpoint::BrandingImages);
        assert!("budget".parse::<Endpoint>().is_err());
    }
}
