//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Shows a "Retry" button when set
    #[props(default)]
    pub on_retry: Option<EventHandler<MouseEvent>>,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A; display: flex; align-items: center; gap: 12px;",
            div {
                style: "flex: 1;",
                strong { "Error: " }
                "{props.message}"
            }
            if let Some(on_retry) = props.on_retry {
                button {
                    class: "slp-button slp-button-outline",
                    onclick: move |evt| on_retry.call(evt),
                    "Retry"
                }
            }
        }
    }
}
