//! Bundled sample documents used in demo mode.

use crate::endpoint::Endpoint;
use log::error;
use serde_json::Value;

/// Embedded sample market analysis for the honey coffee demo.
pub static MARKET_JSON: &str = include_str!("../../fixtures/sample/market.json");
pub static BRANDING_IMAGES_JSON: &str = include_str!("../../fixtures/sample/branding_images.json");
pub static BRANDING_TEXT_JSON: &str = include_str!("../../fixtures/sample/branding_text.json");
pub static OUTREACH_JSON: &str = include_str!("../../fixtures/sample/outreach.json");
pub static PRICING_JSON: &str = include_str!("../../fixtures/sample/pricing.json");

/// Raw sample text for an endpoint.
pub fn sample_json(endpoint: Endpoint) -> &'static str {
    match endpoint {
        Endpoint::Market => MARKET_JSON,
        Endpoint::BrandingImages => BRANDING_IMAGES_JSON,
        Endpoint::BrandingText => BRANDING_TEXT_JSON,
        Endpoint::Outreach => OUTREACH_JSON,
        Endpoint::Pricing => PRICING_JSON,
    }
}

/// Parsed sample document for an endpoint.
pub fn sample(endpoint: Endpoint) -> Value {
    serde_json::from_str(sample_json(endpoint)).unwrap_or_else(|e| {
        error!("bundled {} sample is not valid JSON: {}", endpoint, e);
        Value::Null
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        decode, BrandingImages, BrandingText, EmailKind, MarketAnalysis, OutreachPlaybook,
        PricingStrategy,
    };

    #[test]
    fn test_every_sample_parses() {
        for endpoint in Endpoint::ALL {
            assert!(!sample(endpoint).is_null(), "{}", endpoint);
        }
    }

    #[test]
    fn test_market_sample_view() {
        let market: MarketAnalysis = decode(&sample(Endpoint::Market)).unwrap();
        assert_eq!(market.market_size.tam, "473.1B");
        assert_eq!(market.growth_yoy_percent.som, 6.52);
        assert_eq!(market.competitive_landscape.len(), 5);
        assert_eq!(
            market.competitive_landscape.iter().filter(|c| c.is_own_position()).count(),
            1
        );
        assert_eq!(market.swot.threats.len(), 4);
    }

    #[test]
    fn test_branding_sample_views() {
        let images: BrandingImages = decode(&sample(Endpoint::BrandingImages)).unwrap();
        assert!(images.assets().iter().all(|(_, url)| url.starts_with("/demo/")));
        let text: BrandingText = decode(&sample(Endpoint::BrandingText)).unwrap();
        assert_eq!(text.brand_identity.tagline, "Sweet Buzz, Smooth Sip");
        assert_eq!(text.brand_identity.colors.primary, "#FFA500");
    }

    #[test]
    fn test_outreach_sample_view() {
        let playbook: OutreachPlaybook = decode(&sample(Endpoint::Outreach)).unwrap();
        assert_eq!(playbook.emails_of(EmailKind::Cold).count(), 1);
        assert_eq!(playbook.emails_of(EmailKind::FollowUp).count(), 1);
        assert_eq!(playbook.objections.len(), 2);
    }

    #[test]
    fn test_pricing_sample_view() {
        let pricing: PricingStrategy = decode(&sample(Endpoint::Pricing)).unwrap();
        assert_eq!(pricing.tiers.len(), 3);
        assert_eq!(pricing.tiers.iter().filter(|t| t.popular).count(), 1);
        // 150 * 29 + 75 * 79 + 25 * 199
        assert_eq!(pricing.monthly_revenue(), 15_250.0);
        assert_eq!(pricing.monthly_costs(), 6_300.0);
        assert_eq!(pricing.monthly_profit(), 8_950.0);
        for competitor in &pricing.competitors {
            assert_eq!(competitor.prices_monthly.len(), pricing.tiers.len());
        }
    }
}
