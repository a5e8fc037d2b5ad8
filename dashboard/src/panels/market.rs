//! Market analysis panel: overview, trends, competition and SWOT tabs.

use super::panel_view;
use dioxus::prelude::*;
use slp_core::layout::PanelId;
use slp_core::models::{Competitor, MarketAnalysis};
use slp_core::Endpoint;
use slp_ui::components::{Card, DotList, PanelHeader, TabBar};
use slp_ui::loader::use_panel_loader;

const TABS: [&str; 4] = ["Overview", "Trends", "Competition", "SWOT"];
const BAR_COLORS: [&str; 5] = ["#3B82F6", "#10B981", "#F59E0B", "#8B5CF6", "#EF4444"];

#[component]
pub fn MarketPanel() -> Element {
    let slot = use_panel_loader(Endpoint::Market);
    let tab = use_signal(|| 0usize);
    let title = PanelId::Market.title();

    let market: MarketAnalysis = match panel_view(slot, Endpoint::Market, title) {
        Ok(market) => market,
        Err(placeholder) => return placeholder,
    };

    rsx! {
        div {
            style: "padding: 16px;",
            PanelHeader { title: title.to_string(), subtitle: "Size, segments and competitors for your idea".to_string() }
            TabBar { tabs: TABS.iter().map(|t| t.to_string()).collect::<Vec<_>>(), active: tab }
            {match tab() {
                0 => rsx! { Overview { market: market.clone() } },
                1 => rsx! { Trends { market: market.clone() } },
                2 => rsx! { Competition { competitors: market.competitive_landscape.clone() } },
                _ => rsx! { SwotGrid { market: market.clone() } },
            }}
        }
    }
}

/// Horizontal percentage bar.
#[component]
fn ShareBar(label: String, percent: f64, color: String) -> Element {
    let width = percent.clamp(0.0, 100.0);
    rsx! {
        div {
            style: "margin: 6px 0;",
            div {
                style: "display: flex; justify-content: space-between; font-size: 13px;",
                span { "{label}" }
                span { "{percent:.0}%" }
            }
            div {
                class: "slp-bar",
                div { style: "width: {width}%; background: {color};" }
            }
        }
    }
}

#[component]
fn Overview(market: MarketAnalysis) -> Element {
    let size = &market.market_size;
    let growth = &market.growth_yoy_percent;
    let figures = [
        ("Total addressable market", "TAM", size.tam.clone(), growth.tam),
        ("Serviceable available market", "SAM", size.sam.clone(), growth.sam),
        ("Serviceable obtainable market", "SOM", size.som.clone(), growth.som),
    ];

    rsx! {
        div {
            class: "slp-row",
            for (description, short, value, yoy) in figures {
                Card {
                    key: "{short}",
                    title: short.to_string(),
                    description: description.to_string(),
                    div { style: "font-size: 22px; font-weight: 700;", "${value}" }
                    div { style: "font-size: 12px; color: #10B981;", "+{yoy}% year over year" }
                }
            }
        }
        Card {
            title: "Customer segments".to_string(),
            for (i, segment) in market.customer_segments.iter().enumerate() {
                ShareBar {
                    key: "{i}",
                    label: segment.name.clone(),
                    percent: segment.percent,
                    color: BAR_COLORS[i % BAR_COLORS.len()].to_string(),
                }
            }
        }
        Card {
            title: "Geographic distribution".to_string(),
            for (i, region) in market.geographic_distribution.iter().enumerate() {
                ShareBar {
                    key: "{i}",
                    label: region.region.clone(),
                    percent: region.percent,
                    color: BAR_COLORS[(i + 2) % BAR_COLORS.len()].to_string(),
                }
            }
        }
    }
}

#[component]
fn Trends(market: MarketAnalysis) -> Element {
    rsx! {
        Card {
            title: "Market trends".to_string(),
            description: "What is shifting in this market right now".to_string(),
            DotList { items: market.market_trends.clone(), color: "#10B981".to_string() }
        }
    }
}

/// The user's own position stands out from the competitors.
fn highlight(competitor: &Competitor) -> String {
    if competitor.is_own_position() {
        "border-color: #3B82F6; background: #EFF6FF;".to_string()
    } else {
        String::new()
    }
}

#[component]
fn Competition(competitors: Vec<Competitor>) -> Element {
    rsx! {
        for (i, competitor) in competitors.iter().enumerate() {
            Card {
                key: "{i}",
                title: competitor.competitor_name.clone(),
                style: highlight(competitor),
                ShareBar {
                    label: "Market share".to_string(),
                    percent: competitor.market_share_percent,
                    color: BAR_COLORS[i % BAR_COLORS.len()].to_string(),
                }
                p { style: "margin: 4px 0; font-size: 13px;", strong { "Strengths: " } "{competitor.strengths}" }
                p { style: "margin: 4px 0; font-size: 13px;", strong { "Weaknesses: " } "{competitor.weaknesses}" }
            }
        }
    }
}

#[component]
fn SwotGrid(market: MarketAnalysis) -> Element {
    let swot = &market.swot;
    let quadrants = [
        ("Strengths", "#ECFDF5", "#10B981", swot.strengths.clone()),
        ("Weaknesses", "#FEF2F2", "#EF4444", swot.weaknesses.clone()),
        ("Opportunities", "#EFF6FF", "#3B82F6", swot.opportunities.clone()),
        ("Threats", "#FFFBEB", "#F59E0B", swot.threats.clone()),
    ];

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 12px;",
            for (label, tint, color, items) in quadrants {
                Card {
                    key: "{label}",
                    title: label.to_string(),
                    style: "background: {tint};",
                    DotList { items, color: color.to_string() }
                }
            }
        }
    }
}
