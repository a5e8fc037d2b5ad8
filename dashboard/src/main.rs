//! Startup Launchpad dashboard
//!
//! A single-page Dioxus app with two views chosen by the URL query string:
//!
//! 1. Without an `idea` parameter: the home form collecting a business name
//!    and idea. Submitting navigates to `?idea=..&name=..`.
//! 2. With an `idea`: the dashboard. Each panel loads its own analysis
//!    document (bundled sample with `demo=true`, otherwise one `POST` per
//!    endpoint) and renders a spinner until it arrives.

mod dashboard;
mod home;
mod panels;

use dioxus::prelude::*;
use slp_ui::browser;

const STYLE: &str = include_str!("../assets/style.css");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("launchpad-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let params = use_hook(browser::current_params);
    log::info!("Opening {}", if params.has_idea() { "dashboard" } else { "home" });

    rsx! {
        style { {STYLE} }
        if params.has_idea() {
            dashboard::Dashboard { params: params.clone() }
        } else {
            home::Home {}
        }
    }
}
