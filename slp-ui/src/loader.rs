//! Panel data loading hook.
//!
//! Every panel calls [`use_panel_loader`] once per endpoint it displays. The
//! returned signal is owned by that panel alone; the effect re-runs when the
//! dashboard parameters change and issues at most one request per idea.

use crate::fetch;
use crate::state::DashboardState;
use dioxus::prelude::*;
use log::warn;
use slp_core::sample::sample;
use slp_core::{Endpoint, LoadPlan, LoadTicket, PanelSlot};

/// Initial slot: bundled data right away in demo mode, loading otherwise.
fn initial_slot(endpoint: Endpoint, demo: bool) -> PanelSlot {
    if demo {
        PanelSlot::with_sample(sample(endpoint))
    } else {
        PanelSlot::new()
    }
}

/// Resolve `endpoint` for the current dashboard parameters.
pub fn use_panel_loader(endpoint: Endpoint) -> Signal<PanelSlot> {
    let state = use_context::<DashboardState>();
    let mut slot = use_signal(|| initial_slot(endpoint, state.params.peek().demo));

    use_effect(move || {
        let params = state.params.read().clone();
        let url = state.api.read().url(endpoint);

        match LoadPlan::choose(&params.idea, params.demo) {
            LoadPlan::Sample => {
                if !slot.peek().is_sample() {
                    slot.write().load_sample(sample(endpoint));
                }
            }
            LoadPlan::Idle => {}
            LoadPlan::Fetch => {
                let ticket = slot.write().begin(&params.idea);
                if let Some(ticket) = ticket {
                    spawn_fetch(slot, url, ticket);
                }
            }
        }
    });

    slot
}

/// Run one request and hand its outcome back to the slot.
fn spawn_fetch(mut slot: Signal<PanelSlot>, url: String, ticket: LoadTicket) {
    spawn(async move {
        let outcome = fetch::post_idea(&url, ticket.idea()).await;
        if let Err(e) = &outcome {
            warn!("Panel request to {} failed: {}", url, e);
        }
        slot.write().resolve(&ticket, outcome);
    });
}

/// Re-issue the request of a failed panel.
pub fn retry_panel(state: DashboardState, mut slot: Signal<PanelSlot>, endpoint: Endpoint) {
    let url = state.api.peek().url(endpoint);
    let ticket = slot.write().retry();
    if let Some(ticket) = ticket {
        spawn_fetch(slot, url, ticket);
    }
}
