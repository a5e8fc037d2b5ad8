//! Loading placeholder shown while a panel's data is absent.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardLoadingProps {
    /// Panel title shown above the spinner
    pub title: String,
}

/// Panel title with a spinner underneath.
#[component]
pub fn CardLoading(props: CardLoadingProps) -> Element {
    rsx! {
        div {
            style: "height: 100%; padding: 16px;",
            h2 {
                style: "font-size: 20px; font-weight: bold; margin: 0 0 16px 0;",
                "{props.title}"
            }
            div {
                style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
                div { class: "slp-spinner" }
            }
        }
    }
}

/// Inline spinner for content that loads inside an already-rendered panel.
#[component]
pub fn Spinner(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        div {
            class: "slp-spinner",
            style: "width: {size}px; height: {size}px;",
        }
    }
}
