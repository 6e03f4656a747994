//! Promo Modal Component
//!
//! Full-window promotional screen with a feature checklist, one call to
//! action and a close button.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, CloseButton};

#[component]
pub fn PromoModal(
    /// First headline line
    title: String,
    /// Accented second headline line
    #[props(default)]
    highlight: String,
    /// Supporting paragraph
    #[props(default)]
    body: String,
    /// Checklist entries
    #[props(default)]
    features: Vec<String>,
    /// Call-to-action caption
    cta_label: String,
    /// Callback when the close button is clicked
    on_close: EventHandler<()>,
    /// Callback when the call to action is clicked
    on_action: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "promo-screen",
            div { class: "promo-close",
                CloseButton { onclick: move |_| on_close.call(()) }
            }

            div { class: "promo-content",
                h2 { class: "promo-title",
                    "{title}"
                    if !highlight.is_empty() {
                        br {}
                        span { class: "promo-highlight", "{highlight}" }
                    }
                }

                if !body.is_empty() {
                    p { class: "promo-body", "{body}" }
                }

                if !features.is_empty() {
                    ul { class: "promo-features",
                        for (i, feature) in features.iter().enumerate() {
                            li { key: "{i}",
                                span { class: "promo-check", "aria-hidden": "true", "\u{2713}" }
                                span { "{feature}" }
                            }
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "promo-cta".to_string(),
                    onclick: move |_| on_action.call(()),
                    "{cta_label}"
                }
            }
        }
    }
}
