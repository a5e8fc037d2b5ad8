//! The five dashboard panels.
//!
//! Fetched panels share one pattern: own a `Signal<PanelSlot>` from
//! `use_panel_loader`, then hand it to [`panel_view`] which either decodes the
//! typed document or returns the placeholder to render instead.

mod branding;
mod budgeting;
mod market;
mod outreach;
mod pricing;

pub use branding::BrandingPanel;
pub use budgeting::BudgetingPanel;
pub use market::MarketPanel;
pub use outreach::OutreachPanel;
pub use pricing::PricingPanel;

use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use slp_core::models::decode;
use slp_core::{Endpoint, PanelSlot, PanelState};
use slp_ui::components::{CardLoading, ErrorDisplay, PanelHeader};
use slp_ui::loader::retry_panel;
use slp_ui::state::DashboardState;

/// Decode the slot's document, or produce the loading / error placeholder.
pub fn panel_view<T: DeserializeOwned>(
    slot: Signal<PanelSlot>,
    endpoint: Endpoint,
    title: &str,
) -> Result<T, Element> {
    let current = slot.read().state().clone();
    match current {
        PanelState::Loading => Err(rsx! { CardLoading { title: title.to_string() } }),
        PanelState::Failed(err) => Err(rsx! {
            PanelFailure { title: title.to_string(), message: err.to_string(), slot, endpoint }
        }),
        PanelState::Loaded(value) => decode::<T>(&value).map_err(|err| {
            log::warn!("{} document does not match its view: {}", endpoint, err);
            rsx! {
                div {
                    style: "padding: 16px;",
                    PanelHeader { title: title.to_string() }
                    ErrorDisplay { message: err.to_string() }
                }
            }
        }),
    }
}

#[component]
fn PanelFailure(title: String, message: String, slot: Signal<PanelSlot>, endpoint: Endpoint) -> Element {
    let state = use_context::<DashboardState>();
    rsx! {
        div {
            style: "padding: 16px;",
            PanelHeader { title }
            ErrorDisplay {
                message: format!("Failed to load analysis: {message}"),
                on_retry: move |_| retry_panel(state, slot, endpoint),
            }
        }
    }
}
