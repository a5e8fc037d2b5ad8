//! Typed views over the analysis documents.
//!
//! Panels keep the service's JSON verbatim and decode one of these views at
//! render time. A document that does not fit its view is reported as
//! [`FetchError::Malformed`] instead of panicking.

use crate::allocation::format_usd;
use crate::error::FetchError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decode a stored document into a typed view.
pub fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, FetchError> {
    T::deserialize(value).map_err(|e| FetchError::Malformed(e.to_string()))
}

// ─── Market ───

/// Competitor name the service uses for the user's own venture.
pub const OWN_POSITION: &str = "Your position";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketAnalysis {
    pub competitive_landscape: Vec<Competitor>,
    pub customer_segments: Vec<CustomerSegment>,
    pub geographic_distribution: Vec<Region>,
    pub market_size: MarketSize,
    #[serde(rename = "MarketSizeGrowingYOYPercent")]
    pub growth_yoy_percent: MarketGrowth,
    pub market_trends: Vec<String>,
    #[serde(rename = "SWOT")]
    pub swot: Swot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Competitor {
    pub competitor_name: String,
    pub market_share_percent: f64,
    pub strengths: String,
    pub weaknesses: String,
}

impl Competitor {
    pub fn is_own_position(&self) -> bool {
        self.competitor_name.eq_ignore_ascii_case(OWN_POSITION)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerSegment {
    pub name: String,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    #[serde(rename = "Percent")]
    pub percent: f64,
    pub region: String,
}

/// Market sizes as display strings, e.g. `"473.1B"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct MarketSize {
    pub tam: String,
    pub sam: String,
    pub som: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct MarketGrowth {
    pub tam: f64,
    pub sam: f64,
    pub som: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Swot {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

// ─── Branding ───

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingImages {
    pub logo: String,
    pub website_banner: String,
    pub social_media_avatar: String,
    pub email_header: String,
}

/// Display labels of the generated brand images, in [`BrandingImages::assets`] order.
pub const ASSET_LABELS: [&str; 4] = ["Logo", "Website Banner", "Social Media Avatar", "Email Header"];

impl BrandingImages {
    /// `(label, url)` pairs in display order.
    pub fn assets(&self) -> [(&'static str, &str); 4] {
        [
            (ASSET_LABELS[0], &self.logo),
            (ASSET_LABELS[1], &self.website_banner),
            (ASSET_LABELS[2], &self.social_media_avatar),
            (ASSET_LABELS[3], &self.email_header),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandingText {
    pub brand_identity: BrandIdentity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandIdentity {
    pub colors: BrandColors,
    pub idea: String,
    pub social_media_posts: SocialMediaPosts,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl BrandColors {
    pub fn swatches(&self) -> [(&'static str, &str); 3] {
        [
            ("Primary", &self.primary),
            ("Secondary", &self.secondary),
            ("Accent", &self.accent),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialMediaPosts {
    pub instagram: String,
    pub linkedin: String,
    pub twitter: String,
}

// ─── Outreach ───

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutreachPlaybook {
    pub emails: Vec<EmailTemplate>,
    pub call_script: Vec<ScriptSection>,
    #[serde(default)]
    pub objections: Vec<Objection>,
}

impl OutreachPlaybook {
    pub fn emails_of(&self, kind: EmailKind) -> impl Iterator<Item = &EmailTemplate> {
        self.emails.iter().filter(move |e| e.kind == kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailKind {
    Cold,
    Intro,
    FollowUp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub kind: EmailKind,
    pub title: String,
    pub description: String,
    pub subject: String,
    pub body: String,
}

impl EmailTemplate {
    /// Subject line and body as one copyable text.
    pub fn full_text(&self) -> String {
        format!("Subject: {}\n\n{}", self.subject, self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptSection {
    pub heading: String,
    pub script: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objection {
    pub objection: String,
    pub response: String,
}

// ─── Pricing ───

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingStrategy {
    pub model: PricingModel,
    pub tiers: Vec<PricingTier>,
    pub competitors: Vec<CompetitorPricing>,
    pub projection: FinancialProjection,
    #[serde(default)]
    pub optimizations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingModel {
    pub name: String,
    pub rationale: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price_monthly: f64,
    pub audience: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub excluded: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

/// A competitor's monthly price per tier. `0` means free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorPricing {
    pub name: String,
    pub prices_monthly: Vec<f64>,
    pub differentiator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProjection {
    /// Paying customers per tier, by tier name.
    pub customers: Vec<TierCustomers>,
    pub monthly_costs: Vec<CostLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierCustomers {
    pub tier: String,
    pub customers: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    pub label: String,
    pub amount: f64,
}

/// Revenue of one tier and its share of total revenue.
#[derive(Debug, Clone, PartialEq)]
pub struct TierRevenue {
    pub tier: String,
    pub revenue: f64,
    pub share_percent: f64,
}

impl PricingStrategy {
    fn tier_price(&self, name: &str) -> f64 {
        self.tiers
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .map(|t| t.price_monthly)
            .unwrap_or(0.0)
    }

    /// Monthly revenue per tier from the projected customer counts.
    pub fn revenue_by_tier(&self) -> Vec<TierRevenue> {
        let rows: Vec<(String, f64)> = self
            .projection
            .customers
            .iter()
            .map(|c| (c.tier.clone(), self.tier_price(&c.tier) * f64::from(c.customers)))
            .collect();
        let total: f64 = rows.iter().map(|(_, r)| r).sum();
        rows.into_iter()
            .map(|(tier, revenue)| TierRevenue {
                share_percent: if total > 0.0 { revenue / total * 100.0 } else { 0.0 },
                tier,
                revenue,
            })
            .collect()
    }

    pub fn monthly_revenue(&self) -> f64 {
        self.revenue_by_tier().iter().map(|t| t.revenue).sum()
    }

    pub fn monthly_costs(&self) -> f64 {
        self.projection.monthly_costs.iter().map(|c| c.amount).sum()
    }

    pub fn monthly_profit(&self) -> f64 {
        self.monthly_revenue() - self.monthly_costs()
    }

    /// Profit as a percentage of revenue; zero when there is no revenue.
    pub fn margin_percent(&self) -> f64 {
        let revenue = self.monthly_revenue();
        if revenue <= 0.0 {
            return 0.0;
        }
        self.monthly_profit() / revenue * 100.0
    }
}

/// Render a whole-dollar amount that may be negative, e.g. `-$1,250`.
pub fn format_amount(amount: f64) -> String {
    let whole = format_usd(amount.abs().round().min(f64::from(u32::MAX)) as u32);
    if amount < -0.5 {
        format!("-{}", whole)
    } else {
        whole
    }
}

/// Render a monthly price, `0` as `Free`.
pub fn format_price(price: f64) -> String {
    if price <= 0.0 {
        "Free".to_string()
    } else if price.fract() == 0.0 {
        format!("${:.0}/mo", price)
    } else {
        format!("${:.2}/mo", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pricing() -> PricingStrategy {
        decode(&json!({
            "model": { "name": "Subscription", "rationale": "recurring" },
            "tiers": [
                { "name": "Basic", "price_monthly": 29.0, "audience": "solo", "features": [] },
                { "name": "Pro", "price_monthly": 79.0, "audience": "teams", "features": [], "popular": true }
            ],
            "competitors": [],
            "projection": {
                "customers": [
                    { "tier": "Basic", "customers": 100 },
                    { "tier": "Pro", "customers": 50 }
                ],
                "monthly_costs": [
                    { "label": "Infrastructure", "amount": 2000.0 },
                    { "label": "Support", "amount": 1000.0 }
                ]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_pricing_projection() {
        let p = pricing();
        assert_eq!(p.monthly_revenue(), 2900.0 + 3950.0);
        assert_eq!(p.monthly_costs(), 3000.0);
        assert_eq!(p.monthly_profit(), 3850.0);
        let shares: Vec<f64> = p.revenue_by_tier().iter().map(|t| t.share_percent.round()).collect();
        assert_eq!(shares, vec![42.0, 58.0]);
        assert!(p.tiers[1].popular && !p.tiers[0].popular);
    }

    #[test]
    fn test_unknown_tier_earns_nothing() {
        let mut p = pricing();
        p.projection.customers.push(TierCustomers { tier: "Gold".into(), customers: 9 });
        assert_eq!(p.monthly_revenue(), 6850.0);
    }

    #[test]
    fn test_decode_mismatch_is_malformed() {
        let result: Result<MarketAnalysis, _> = decode(&json!({"MarketTrends": "not a list"}));
        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }

    #[test]
    fn test_own_position() {
        let c = Competitor {
            competitor_name: "Your Position".into(),
            market_share_percent: 5.0,
            strengths: String::new(),
            weaknesses: String::new(),
        };
        assert!(c.is_own_position());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(15250.0), "$15,250");
        assert_eq!(format_amount(-1250.4), "-$1,250");
        assert_eq!(format_amount(0.2), "$0");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "Free");
        assert_eq!(format_price(29.0), "$29/mo");
        assert_eq!(format_price(9.5), "$9.50/mo");
    }
}
