//! Card container and bullet list used by panel content.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    pub title: String,
    #[props(default = String::new())]
    pub description: String,
    /// Extra inline style, e.g. a background tint
    #[props(default = String::new())]
    pub style: String,
    pub children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        div {
            class: "slp-card",
            style: "{props.style}",
            h3 { style: "margin: 0; font-size: 15px;", "{props.title}" }
            if !props.description.is_empty() {
                p { style: "margin: 2px 0 0 0; font-size: 12px; color: #666;", "{props.description}" }
            }
            div { style: "margin-top: 8px;", {props.children} }
        }
    }
}

/// A list of short lines, each with a colored dot.
#[component]
pub fn DotList(items: Vec<String>, #[props(default = "#3B82F6".to_string())] color: String) -> Element {
    rsx! {
        ul {
            style: "list-style: none; padding: 0; margin: 0;",
            for (i, item) in items.iter().enumerate() {
                li {
                    key: "{i}",
                    style: "display: flex; align-items: center; gap: 8px; margin: 4px 0;",
                    span { style: "width: 8px; height: 8px; border-radius: 50%; background: {color}; flex-shrink: 0;" }
                    span { "{item}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::{NoOpMutations, ScopeId};

    #[test]
    fn test_dot_list_renders_repeated_lines() {
        let props = DotListProps {
            items: vec!["Free delivery".to_string(), "Free delivery".to_string()],
            color: "#10B981".to_string(),
        };
        let mut dom = VirtualDom::new_with_props(DotList, props);
        dom.rebuild_in_place();

        // A second render diffs the keyed list against itself.
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);
    }
}
