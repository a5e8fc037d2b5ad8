//! Home form: collects a business name and idea.

use dioxus::prelude::*;
use slp_core::params::DashboardParams;
use slp_ui::browser;

#[component]
pub fn Home() -> Element {
    let mut name = use_signal(String::new);
    let mut idea = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error_msg: Signal<Option<String>> = use_signal(|| None);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let params = DashboardParams::new(idea().trim(), name().trim());
        if params.name.is_empty() || !params.has_idea() {
            error_msg.set(Some("Please enter both a business name and an idea.".to_string()));
            return;
        }
        error_msg.set(None);
        submitting.set(true);
        browser::open_dashboard(&params);
    };

    rsx! {
        div {
            class: "slp-home",
            div {
                class: "slp-card",
                style: "width: 100%; max-width: 560px; padding: 24px;",
                h1 { style: "margin: 0 0 4px 0; font-size: 24px;", "Startup Launchpad" }
                p {
                    style: "margin: 0 0 20px 0; color: #666;",
                    "Enter your business details to get market research, branding, outreach and pricing in one dashboard."
                }
                form {
                    onsubmit: on_submit,
                    div {
                        class: "slp-field",
                        label { r#for: "business-name", "Business Name" }
                        input {
                            id: "business-name",
                            placeholder: "Enter your business name",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    div {
                        class: "slp-field",
                        label { r#for: "business-idea", "Business Idea" }
                        textarea {
                            id: "business-idea",
                            rows: "5",
                            placeholder: "Describe your business idea in detail...",
                            value: "{idea}",
                            oninput: move |evt| idea.set(evt.value()),
                        }
                    }
                    if let Some(msg) = error_msg() {
                        p { style: "color: #C62828; font-size: 13px;", "{msg}" }
                    }
                    div {
                        style: "display: flex; gap: 8px;",
                        button {
                            class: "slp-button",
                            style: "flex: 1;",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() { "Creating your dashboard..." } else { "Launch Dashboard" }
                        }
                        button {
                            class: "slp-button slp-button-outline",
                            r#type: "button",
                            onclick: move |_| browser::open_dashboard(&DashboardParams::demo()),
                            "View demo"
                        }
                    }
                }
            }
        }
    }
}
