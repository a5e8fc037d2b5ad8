//! Horizontal tab strip used inside each panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TabBarProps {
    /// Tab labels in display order
    pub tabs: Vec<String>,
    /// Index of the selected tab
    pub active: Signal<usize>,
    /// Tabs that cannot be selected
    #[props(default)]
    pub disabled: Vec<usize>,
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "slp-tab slp-tab-active"
    } else {
        "slp-tab"
    }
}

#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    let mut active = props.active;
    let current = active();
    let columns = props.tabs.len().max(1);

    rsx! {
        div {
            class: "slp-tabs",
            style: "display: grid; grid-template-columns: repeat({columns}, 1fr);",
            for (i, label) in props.tabs.iter().enumerate() {
                button {
                    key: "{label}",
                    class: tab_class(i == current),
                    disabled: props.disabled.contains(&i),
                    onclick: move |_| active.set(i),
                    "{label}"
                }
            }
        }
    }
}
