//! Branding panel.
//!
//! Two documents feed this panel. The text document (tagline, colors, social
//! posts) gates the whole panel; the generated images load on their own and
//! each shows a small spinner until the image document arrives.

use super::panel_view;
use dioxus::prelude::*;
use slp_core::layout::PanelId;
use slp_core::models::{decode, BrandingImages, BrandingText, ASSET_LABELS};
use slp_core::{Endpoint, PanelSlot, PanelState};
use slp_ui::components::{Card, PanelHeader, Spinner, TabBar};
use slp_ui::loader::{retry_panel, use_panel_loader};
use slp_ui::state::DashboardState;

const TABS: [&str; 3] = ["Logo & Colors", "Social Media", "Assets"];

/// Where the image document stands, reduced to what an image slot needs.
#[derive(Clone, PartialEq)]
enum ImageSet {
    Pending,
    Ready(BrandingImages),
    Unavailable(String),
}

fn image_set(slot: &PanelSlot) -> ImageSet {
    match slot.state() {
        PanelState::Loading => ImageSet::Pending,
        PanelState::Failed(err) => ImageSet::Unavailable(err.to_string()),
        PanelState::Loaded(value) => match decode::<BrandingImages>(value) {
            Ok(images) => ImageSet::Ready(images),
            Err(err) => ImageSet::Unavailable(err.to_string()),
        },
    }
}

#[component]
pub fn BrandingPanel() -> Element {
    let state = use_context::<DashboardState>();
    let text_slot = use_panel_loader(Endpoint::BrandingText);
    let image_slot = use_panel_loader(Endpoint::BrandingImages);
    let tab = use_signal(|| 0usize);
    let title = PanelId::Branding.title();

    let text: BrandingText = match panel_view(text_slot, Endpoint::BrandingText, title) {
        Ok(text) => text,
        Err(placeholder) => return placeholder,
    };
    let images = image_set(&image_slot.read());
    let identity = text.brand_identity;
    let brand_name = state.params.read().display_name();

    rsx! {
        div {
            style: "padding: 16px;",
            PanelHeader { title: title.to_string(), subtitle: format!("Identity, voice and assets for {brand_name}") }
            TabBar { tabs: TABS.iter().map(|t| t.to_string()).collect::<Vec<_>>(), active: tab }
            if let ImageSet::Unavailable(message) = images.clone() {
                div {
                    style: "font-size: 12px; color: #C62828; margin-bottom: 8px; display: flex; gap: 8px; align-items: center;",
                    "Images unavailable: {message}"
                    button {
                        class: "slp-button slp-button-outline",
                        style: "padding: 2px 8px; font-size: 12px;",
                        onclick: move |_| retry_panel(state, image_slot, Endpoint::BrandingImages),
                        "Retry"
                    }
                }
            }
            {match tab() {
                0 => rsx! {
                    div {
                        class: "slp-row",
                        Card {
                            title: "Logo".to_string(),
                            BrandImage { images: images.clone(), index: 0 }
                        }
                        Card {
                            title: "Tagline".to_string(),
                            p { style: "font-size: 18px; font-style: italic; margin: 0;", "\"{identity.tagline}\"" }
                            p { style: "font-size: 12px; color: #666;", "{identity.idea}" }
                        }
                    }
                    Card {
                        title: "Brand colors".to_string(),
                        div {
                            style: "display: flex; gap: 16px;",
                            for (label, hex) in identity.colors.swatches() {
                                div {
                                    key: "{label}",
                                    style: "text-align: center; font-size: 12px;",
                                    div { style: "width: 56px; height: 56px; border-radius: 8px; border: 1px solid #e2e8f0; background: {hex};" }
                                    div { "{label}" }
                                    div { style: "color: #666;", "{hex}" }
                                }
                            }
                        }
                    }
                },
                1 => rsx! {
                    SocialPost { network: "Instagram".to_string(), text: identity.social_media_posts.instagram.clone() }
                    SocialPost { network: "LinkedIn".to_string(), text: identity.social_media_posts.linkedin.clone() }
                    SocialPost { network: "Twitter".to_string(), text: identity.social_media_posts.twitter.clone() }
                },
                _ => rsx! {
                    div {
                        class: "slp-row",
                        for index in 1..4usize {
                            Card {
                                key: "{index}",
                                title: ASSET_LABELS[index].to_string(),
                                BrandImage { images: images.clone(), index }
                            }
                        }
                    }
                },
            }}
        }
    }
}

/// One generated image, or a spinner while the image document is pending.
#[component]
fn BrandImage(images: ImageSet, index: usize) -> Element {
    match images {
        ImageSet::Ready(images) => {
            let assets = images.assets();
            let Some((label, url)) = assets.get(index).copied() else {
                return rsx! {};
            };
            rsx! {
                img {
                    src: "{url}",
                    alt: "{label}",
                    style: "max-width: 100%; max-height: 160px; display: block; margin: 0 auto;",
                }
            }
        }
        ImageSet::Pending => rsx! {
            div {
                style: "display: flex; justify-content: center; padding: 24px;",
                Spinner { size: 20 }
            }
        },
        ImageSet::Unavailable(_) => rsx! {
            div { style: "text-align: center; padding: 24px; color: #94a3b8; font-size: 12px;", "No image" }
        },
    }
}

#[component]
fn SocialPost(network: String, text: String) -> Element {
    rsx! {
        Card {
            title: network,
            p { style: "margin: 0; font-size: 13px; white-space: pre-wrap;", "{text}" }
        }
    }
}
