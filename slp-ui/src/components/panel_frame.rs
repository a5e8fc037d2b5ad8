//! Grid cell hosting one dashboard panel.

use crate::state::DashboardState;
use dioxus::prelude::*;
use log::warn;
use slp_core::layout::{Placement, GRID_COLUMNS};

#[derive(Props, Clone, PartialEq)]
pub struct PanelFrameProps {
    pub placement: Placement,
    pub children: Element,
}

/// Places a panel on the dashboard grid with controls to move and resize it.
#[component]
pub fn PanelFrame(props: PanelFrameProps) -> Element {
    let mut state = use_context::<DashboardState>();
    let placement = props.placement;
    let id = placement.id;
    let style = placement.grid_style();

    let mut shift = move |forward: bool| {
        let bp = (state.breakpoint)();
        let order = state.layout.read().ordered(bp);
        let Some(pos) = order.iter().position(|p| p.id == id) else {
            return;
        };
        let neighbour = if forward { order.get(pos + 1) } else { pos.checked_sub(1).and_then(|i| order.get(i)) };
        if let Some(other) = neighbour.map(|p| p.id) {
            if let Err(e) = state.layout.write().swap(bp, id, other) {
                warn!("Layout change rejected: {}", e);
            }
        }
    };

    let toggle_width = move |_: MouseEvent| {
        let bp = (state.breakpoint)();
        let width = if placement.w < GRID_COLUMNS { GRID_COLUMNS } else { GRID_COLUMNS / 2 };
        if let Err(e) = state.layout.write().resize_panel(bp, id, width, placement.h) {
            warn!("Layout change rejected: {}", e);
        }
    };

    rsx! {
        div {
            class: "slp-panel",
            style: "{style}",
            div {
                class: "slp-panel-controls",
                button { title: "Move earlier", onclick: move |_| shift(false), "<" }
                button { title: "Move later", onclick: move |_| shift(true), ">" }
                button {
                    title: "Toggle width",
                    onclick: toggle_width,
                    if placement.w < GRID_COLUMNS { "Widen" } else { "Narrow" }
                }
            }
            {props.children}
        }
    }
}
