//! Outreach panel: email templates, call script, follow-ups and objections.

use super::panel_view;
use dioxus::prelude::*;
use slp_core::layout::PanelId;
use slp_core::models::{EmailKind, EmailTemplate, OutreachPlaybook};
use slp_core::Endpoint;
use slp_ui::components::{Card, PanelHeader, TabBar};
use slp_ui::loader::use_panel_loader;

const TABS: [&str; 4] = ["Email Scripts", "Call Script", "Follow-up", "Objections"];

#[component]
pub fn OutreachPanel() -> Element {
    let slot = use_panel_loader(Endpoint::Outreach);
    let tab = use_signal(|| 0usize);
    let title = PanelId::Outreach.title();

    let playbook: OutreachPlaybook = match panel_view(slot, Endpoint::Outreach, title) {
        Ok(playbook) => playbook,
        Err(placeholder) => return placeholder,
    };
    let first_contact: Vec<EmailTemplate> = playbook
        .emails_of(EmailKind::Cold)
        .chain(playbook.emails_of(EmailKind::Intro))
        .cloned()
        .collect();
    let follow_ups: Vec<EmailTemplate> = playbook.emails_of(EmailKind::FollowUp).cloned().collect();
    // An empty objection list hides its tab content behind a disabled tab.
    let disabled = if playbook.objections.is_empty() { vec![3] } else { Vec::new() };

    rsx! {
        div {
            style: "padding: 16px;",
            PanelHeader { title: title.to_string(), subtitle: "Ready-to-use scripts for reaching customers".to_string() }
            TabBar { tabs: TABS.iter().map(|t| t.to_string()).collect::<Vec<_>>(), active: tab, disabled }
            {match tab() {
                0 => rsx! { EmailList { emails: first_contact } },
                1 => rsx! {
                    Card {
                        title: "Phone call script".to_string(),
                        description: "Adapt to the conversation; listen more than you talk".to_string(),
                        for (i, section) in playbook.call_script.iter().enumerate() {
                            div {
                                key: "{i}",
                                style: "margin-bottom: 10px;",
                                h4 { style: "margin: 0 0 4px 0; font-size: 13px;", "{section.heading}" }
                                pre { class: "slp-template", "{section.script}" }
                            }
                        }
                    }
                },
                2 => rsx! { EmailList { emails: follow_ups } },
                _ => rsx! {
                    for (i, item) in playbook.objections.iter().enumerate() {
                        Card {
                            key: "{i}",
                            title: format!("\"{}\"", item.objection),
                            p { style: "margin: 0; font-size: 13px;", "{item.response}" }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn EmailList(emails: Vec<EmailTemplate>) -> Element {
    if emails.is_empty() {
        return rsx! {
            p { style: "color: #666; font-size: 13px;", "No templates for this stage yet." }
        };
    }
    rsx! {
        for (i, email) in emails.iter().enumerate() {
            Card {
                key: "{i}",
                title: email.title.clone(),
                description: email.description.clone(),
                pre { class: "slp-template", "{email.full_text()}" }
            }
        }
    }
}
