//! Pricing panel: model, tiers, competitor comparison and a revenue calculator.

use super::panel_view;
use dioxus::prelude::*;
use slp_core::layout::PanelId;
use slp_core::models::{format_amount, format_price, PricingStrategy, PricingTier};
use slp_core::Endpoint;
use slp_ui::components::{Card, DotList, PanelHeader, TabBar};
use slp_ui::loader::use_panel_loader;

const TABS: [&str; 4] = ["Model", "Tiers", "Competitors", "Calculator"];

#[component]
pub fn PricingPanel() -> Element {
    let slot = use_panel_loader(Endpoint::Pricing);
    let tab = use_signal(|| 0usize);
    let title = PanelId::Pricing.title();

    let pricing: PricingStrategy = match panel_view(slot, Endpoint::Pricing, title) {
        Ok(pricing) => pricing,
        Err(placeholder) => return placeholder,
    };

    rsx! {
        div {
            style: "padding: 16px;",
            PanelHeader { title: title.to_string(), subtitle: "How to charge and what it earns".to_string() }
            TabBar { tabs: TABS.iter().map(|t| t.to_string()).collect::<Vec<_>>(), active: tab }
            {match tab() {
                0 => rsx! {
                    Card {
                        title: pricing.model.name.clone(),
                        description: "Recommended pricing model".to_string(),
                        p { style: "margin: 0 0 8px 0; font-size: 13px;", "{pricing.model.rationale}" }
                        DotList { items: pricing.model.recommendations.clone() }
                    }
                },
                1 => rsx! {
                    div {
                        class: "slp-row",
                        for (i, tier) in pricing.tiers.iter().enumerate() {
                            TierCard { key: "{i}", tier: tier.clone() }
                        }
                    }
                },
                2 => rsx! { CompetitorTable { pricing: pricing.clone() } },
                _ => rsx! { Calculator { pricing: pricing.clone() } },
            }}
        }
    }
}

fn tier_style(tier: &PricingTier) -> String {
    if tier.popular {
        "border-color: #3B82F6; box-shadow: 0 0 0 1px #3B82F6;".to_string()
    } else {
        String::new()
    }
}

#[component]
fn TierCard(tier: PricingTier) -> Element {
    rsx! {
        Card {
            title: tier.name.clone(),
            description: tier.audience.clone(),
            style: tier_style(&tier),
            if tier.popular {
                span { class: "slp-badge", "Most popular" }
            }
            div { style: "font-size: 22px; font-weight: 700; margin: 6px 0;", "{format_price(tier.price_monthly)}" }
            DotList { items: tier.features.clone(), color: "#10B981".to_string() }
            if !tier.excluded.is_empty() {
                DotList { items: tier.excluded.clone(), color: "#CBD5E1".to_string() }
            }
        }
    }
}

#[component]
fn CompetitorTable(pricing: PricingStrategy) -> Element {
    rsx! {
        Card {
            title: "Competitor pricing".to_string(),
            table {
                class: "slp-table",
                thead {
                    tr {
                        th { "Company" }
                        for (i, tier) in pricing.tiers.iter().enumerate() {
                            th { key: "{i}", "{tier.name}" }
                        }
                        th { "Differentiator" }
                    }
                }
                tbody {
                    tr {
                        td { strong { "You" } }
                        for (i, tier) in pricing.tiers.iter().enumerate() {
                            td { key: "{i}", "{format_price(tier.price_monthly)}" }
                        }
                        td { "" }
                    }
                    for (row, competitor) in pricing.competitors.iter().enumerate() {
                        tr {
                            key: "{row}",
                            td { "{competitor.name}" }
                            for (i, price) in competitor.prices_monthly.iter().enumerate() {
                                td { key: "{i}", "{format_price(*price)}" }
                            }
                            td { "{competitor.differentiator}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Calculator(pricing: PricingStrategy) -> Element {
    let revenue = pricing.monthly_revenue();
    let costs = pricing.monthly_costs();
    let profit = pricing.monthly_profit();
    let margin = pricing.margin_percent();

    rsx! {
        div {
            class: "slp-row",
            Card { title: "Monthly revenue".to_string(), div { style: "font-size: 20px; font-weight: 700;", "{format_amount(revenue)}" } }
            Card { title: "Monthly costs".to_string(), div { style: "font-size: 20px; font-weight: 700;", "{format_amount(costs)}" } }
            Card {
                title: "Monthly profit".to_string(),
                div { style: "font-size: 20px; font-weight: 700;", "{format_amount(profit)}" }
                div { style: "font-size: 12px; color: #666;", "{margin:.1}% margin" }
            }
        }
        Card {
            title: "Revenue by tier".to_string(),
            table {
                class: "slp-table",
                thead { tr { th { "Tier" } th { "Customers" } th { "Revenue" } th { "Share" } } }
                tbody {
                    for (i, (row, customers)) in pricing.revenue_by_tier().iter().zip(pricing.projection.customers.iter()).enumerate() {
                        tr {
                            key: "{i}",
                            td { "{row.tier}" }
                            td { "{customers.customers}" }
                            td { "{format_amount(row.revenue)}" }
                            td { "{row.share_percent:.0}%" }
                        }
                    }
                }
            }
        }
        Card {
            title: "Monthly costs".to_string(),
            for (i, line) in pricing.projection.monthly_costs.iter().enumerate() {
                div {
                    key: "{i}",
                    style: "display: flex; justify-content: space-between; font-size: 13px; margin: 4px 0;",
                    span { "{line.label}" }
                    span { "{format_amount(line.amount)}" }
                }
            }
        }
        if !pricing.optimizations.is_empty() {
            Card {
                title: "Optimization ideas".to_string(),
                DotList { items: pricing.optimizations.clone(), color: "#8B5CF6".to_string() }
            }
        }
    }
}
