//! Core types for the Startup Launchpad dashboard.
//!
//! - `allocation`: proportional three-way budget rebalancing
//! - `endpoint` / `load_state`: the panel request contract and per-panel state
//! - `models` / `sample`: typed views of analysis documents and demo data
//! - `layout` / `params`: dashboard grid and navigation parameters
//!
//! The `api` feature adds a native `reqwest` client (not used by the WASM app).

pub mod allocation;
pub mod endpoint;
pub mod error;
pub mod layout;
pub mod load_state;
pub mod models;
pub mod params;
pub mod sample;

#[cfg(feature = "api")]
pub mod api;

pub use endpoint::{ApiConfig, Endpoint, LoadPlan};
pub use error::FetchError;
pub use load_state::{LoadTicket, PanelSlot, PanelState};
