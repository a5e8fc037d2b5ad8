//! Dashboard state managed via Dioxus context.
//!
//! `DashboardState` bundles the inputs every panel shares into one struct
//! provided with `use_context_provider`. Panels retrieve it with
//! `use_context::<DashboardState>()` and keep their own load state locally.

use dioxus::prelude::*;
use slp_core::layout::{Breakpoint, LayoutState};
use slp_core::params::DashboardParams;
use slp_core::ApiConfig;

/// Compile-time override for the analysis service location.
const API_URL_OVERRIDE: Option<&str> = option_env!("SLP_API_URL");

/// Shared state for the dashboard view.
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Idea, name and demo flag from the URL
    pub params: Signal<DashboardParams>,
    /// Where panel requests go
    pub api: Signal<ApiConfig>,
    /// Panel placement per breakpoint
    pub layout: Signal<LayoutState>,
    /// Breakpoint matching the viewport at mount
    pub breakpoint: Signal<Breakpoint>,
}

impl DashboardState {
    pub fn new(params: DashboardParams, breakpoint: Breakpoint) -> Self {
        Self {
            params: Signal::new(params),
            api: Signal::new(api_config()),
            layout: Signal::new(LayoutState::default()),
            breakpoint: Signal::new(breakpoint),
        }
    }
}

/// API configuration baked into this build.
pub fn api_config() -> ApiConfig {
    match API_URL_OVERRIDE {
        Some(url) if !url.trim().is_empty() => ApiConfig::new(url),
        _ => ApiConfig::default(),
    }
}
