//! Slider for one budget allocation percentage.

use dioxus::prelude::*;
use slp_core::allocation::{format_usd, AllocationField, Budget};

#[derive(Props, Clone, PartialEq)]
pub struct AllocationSliderProps {
    pub field: AllocationField,
    /// Current percentage
    pub value: u8,
    pub budget: Budget,
    /// Called with the new percentage, already clamped to 0..=100
    pub on_change: EventHandler<u8>,
    #[props(default = "#3B82F6".to_string())]
    pub color: String,
}

#[component]
pub fn AllocationSlider(props: AllocationSliderProps) -> Element {
    let field = props.field;
    let monthly = format_usd(props.budget.monthly_amount(props.value));
    let recommended = field.recommended();
    let recommended_monthly = format_usd(props.budget.monthly_amount(recommended));
    let on_change = props.on_change;

    let on_input = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<u8>() {
            on_change.call(value.min(100));
        }
    };

    rsx! {
        div {
            style: "margin: 12px 0;",
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                h3 {
                    style: "margin: 0; font-size: 14px;",
                    title: "{field.description()}",
                    "{field.label()}"
                }
                span { style: "font-weight: 600;", "{props.value}%" }
                span { style: "font-size: 12px; color: #666;", "{monthly}/mo" }
            }
            input {
                r#type: "range",
                min: "0",
                max: "100",
                step: "1",
                value: "{props.value}",
                style: "width: 100%; accent-color: {props.color};",
                oninput: on_input,
            }
            div {
                style: "display: flex; gap: 24px; font-size: 12px; color: #666;",
                span { "Recommended: {recommended}% ({recommended_monthly}/mo)" }
                span { "Industry average: {field.industry_average()} for early-stage startups" }
            }
        }
    }
}
