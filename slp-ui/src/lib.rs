//! Shared Dioxus components and browser glue for the Startup Launchpad dashboard.
//!
//! This crate provides:
//! - `fetch`: `window.fetch` wrapper implementing the panel request contract
//! - `browser`: query-string navigation and viewport breakpoint
//! - `state`: `DashboardState` context with Dioxus Signals
//! - `loader`: per-panel loading hook with stale-response protection
//! - `components`: reusable RSX components (loading card, tabs, sliders, etc.)

pub mod browser;
pub mod components;
pub mod fetch;
pub mod loader;
pub mod state;
