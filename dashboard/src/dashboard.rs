//! Dashboard view: header plus the panel grid.

use crate::panels::{BrandingPanel, BudgetingPanel, MarketPanel, OutreachPanel, PricingPanel};
use dioxus::prelude::*;
use slp_core::layout::{PanelId, MARGIN_PX, ROW_HEIGHT_PX};
use slp_core::params::DashboardParams;
use slp_ui::browser;
use slp_ui::components::PanelFrame;
use slp_ui::state::DashboardState;

fn panel_body(id: PanelId) -> Element {
    match id {
        PanelId::Market => rsx! { MarketPanel {} },
        PanelId::Branding => rsx! { BrandingPanel {} },
        PanelId::Outreach => rsx! { OutreachPanel {} },
        PanelId::Pricing => rsx! { PricingPanel {} },
        PanelId::Budgeting => rsx! { BudgetingPanel {} },
    }
}

#[component]
pub fn Dashboard(params: DashboardParams) -> Element {
    let state = use_context_provider(|| DashboardState::new(params, browser::current_breakpoint()));

    let params = state.params.read().clone();
    let breakpoint = (state.breakpoint)();
    let placements = state.layout.read().ordered(breakpoint);

    rsx! {
        header {
            class: "slp-header",
            div {
                class: "slp-header-inner",
                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    button {
                        class: "slp-button slp-button-outline",
                        title: "Back to home",
                        onclick: move |_| browser::open_home(),
                        "<"
                    }
                    div {
                        h1 { style: "margin: 0; font-size: 20px;", "{params.title()}" }
                        p { style: "margin: 0; font-size: 13px; color: #666;", "{params.description()}" }
                    }
                }
                if params.demo {
                    span { class: "slp-badge", "Demo data" }
                }
            }
        }
        main {
            class: "slp-grid",
            style: "grid-auto-rows: {ROW_HEIGHT_PX}px; gap: {MARGIN_PX}px;",
            for placement in placements {
                PanelFrame {
                    key: "{placement.id:?}",
                    placement,
                    {panel_body(placement.id)}
                }
            }
        }
    }
}
