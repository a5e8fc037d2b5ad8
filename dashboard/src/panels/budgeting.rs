//! Budgeting panel. Always populated; it has no analysis endpoint.

use dioxus::prelude::*;
use slp_core::allocation::{format_usd, AllocationField, AllocationState, Budget};
use slp_core::layout::PanelId;
use slp_ui::components::{AllocationSlider, Card, PanelHeader, TabBar};

const TABS: [&str; 2] = ["Allocation", "Runway"];
/// Below this many months of runway the panel shows an alert.
const LOW_RUNWAY_MONTHS: f64 = 3.0;

fn slider_color(field: AllocationField) -> &'static str {
    match field {
        AllocationField::Marketing => "#3B82F6",
        AllocationField::Investments => "#10B981",
        AllocationField::Labor => "#F59E0B",
    }
}

#[component]
pub fn BudgetingPanel() -> Element {
    let mut allocation = use_signal(AllocationState::default);
    let budget = use_signal(Budget::default);
    let tab = use_signal(|| 0usize);

    let current = allocation();
    let budget_now = budget();
    let runway = budget_now.runway_months();

    rsx! {
        div {
            style: "padding: 16px;",
            PanelHeader {
                title: PanelId::Budgeting.title().to_string(),
                subtitle: format!("Monthly budget {}", format_usd(budget_now.monthly_usd)),
            }
            TabBar { tabs: TABS.iter().map(|t| t.to_string()).collect::<Vec<_>>(), active: tab }
            if tab() == 0 {
                div {
                    style: "display: flex; align-items: center; justify-content: space-between; font-size: 13px;",
                    label {
                        style: "display: flex; align-items: center; gap: 6px;",
                        input {
                            r#type: "checkbox",
                            checked: current.auto_adjust,
                            onchange: move |evt: Event<FormData>| allocation.write().set_auto_adjust(evt.checked()),
                        }
                        "Auto-balance"
                    }
                    button {
                        class: "slp-button slp-button-outline",
                        onclick: move |_| allocation.write().reset_to_recommended(),
                        "Reset to recommended"
                    }
                }
                for field in AllocationField::ALL {
                    AllocationSlider {
                        key: "{field}",
                        field,
                        value: current.get(field),
                        budget: budget_now,
                        color: slider_color(field).to_string(),
                        on_change: move |value: u8| allocation.write().set(field, value),
                    }
                }
                if !current.is_balanced() {
                    div {
                        style: "padding: 8px 12px; background: #FFFBEB; border: 1px solid #F59E0B; border-radius: 6px; font-size: 13px;",
                        "Allocations add up to {current.total()}%. Adjust them to total 100%."
                    }
                }
            } else {
                div {
                    class: "slp-row",
                    Card {
                        title: "Current balance".to_string(),
                        div { style: "font-size: 22px; font-weight: 700;", "{format_usd(budget_now.balance_usd)}" }
                    }
                    Card {
                        title: "Monthly spend".to_string(),
                        div { style: "font-size: 22px; font-weight: 700;", "{format_usd(budget_now.monthly_usd)}" }
                    }
                    Card {
                        title: "Runway".to_string(),
                        div { style: "font-size: 22px; font-weight: 700;", "{runway:.1} months" }
                    }
                }
                if runway < LOW_RUNWAY_MONTHS {
                    div {
                        style: "padding: 8px 12px; background: #FEF2F2; border: 1px solid #EF4444; border-radius: 6px; font-size: 13px;",
                        strong { "Low runway. " }
                        "At the current monthly spend the balance lasts {runway:.1} months. Plan the next raise or cut spending."
                    }
                }
                Card {
                    title: "Planned monthly spend".to_string(),
                    for field in AllocationField::ALL {
                        div {
                            key: "{field}",
                            style: "display: flex; justify-content: space-between; font-size: 13px; margin: 4px 0;",
                            span { "{field.label()} ({current.get(field)}%)" }
                            span { "{format_usd(budget_now.monthly_amount(current.get(field)))}" }
                        }
                    }
                }
            }
        }
    }
}
