//! Navigation through URL query parameters.

use log::warn;
use slp_core::layout::Breakpoint;
use slp_core::params::DashboardParams;
use web_sys::UrlSearchParams;

const KEYS: [&str; 4] = ["idea", "name", "description", "demo"];

/// Read dashboard parameters from `window.location.search`.
pub fn current_params() -> DashboardParams {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let Ok(query) = UrlSearchParams::new_with_str(&search) else {
        return DashboardParams::default();
    };
    DashboardParams::from_pairs(
        KEYS.iter()
            .filter_map(|key| query.get(key).map(|value| (*key, value))),
    )
}

/// Encode parameters as a query string (without the leading `?`).
pub fn to_query(params: &DashboardParams) -> String {
    match UrlSearchParams::new() {
        Ok(query) => {
            for (key, value) in params.to_pairs() {
                query.append(key, &value);
            }
            String::from(query.to_string())
        }
        Err(_) => String::new(),
    }
}

fn set_search(search: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_search(search) {
        warn!("Navigation failed: {:?}", e);
    }
}

/// Open the dashboard for `params`.
pub fn open_dashboard(params: &DashboardParams) {
    set_search(&to_query(params));
}

/// Return to the home form.
pub fn open_home() {
    set_search("");
}

/// Breakpoint for the current viewport width; `lg` if it cannot be read.
pub fn current_breakpoint() -> Breakpoint {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(|w| Breakpoint::for_width(w.max(0.0) as u32))
        .unwrap_or(Breakpoint::Lg)
}
