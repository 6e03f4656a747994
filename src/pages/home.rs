//! Home page - hosts the promo screen and the consent flow.
//!
//! The page plays the part of the application shell: it owns the consent
//! status, mounts the modal with its two callbacks, and unmounts it once a
//! callback fires. Consent is kept in memory only.

use consentgate_core::Disclosure;
use consentgate_ui::{
    Button, ButtonVariant, CardSkeleton, ConsentModal, FilterSkeleton, ListRowSkeleton,
    PromoModal, StatsSkeleton, ThemeToggle,
};
use dioxus::prelude::*;

use crate::context::{load_disclosure, toggle_theme, use_settings, use_theme_mode};

/// What the reader did with the notice this session
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ConsentStatus {
    #[default]
    Pending,
    Approved,
    Declined,
}

impl ConsentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConsentStatus::Pending => "Not yet reviewed",
            ConsentStatus::Approved => "Approved",
            ConsentStatus::Declined => "Declined",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ConsentStatus::Pending => "status-pending",
            ConsentStatus::Approved => "status-approved",
            ConsentStatus::Declined => "status-declined",
        }
    }
}

fn promo_features() -> Vec<String> {
    [
        "Create it in seconds",
        "Completely free",
        "Become visible to employers",
        "Let your profile find work while you do something else",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[component]
pub fn Home() -> Element {
    let settings = use_settings();
    let mode = use_theme_mode();
    let mut status = use_signal(ConsentStatus::default);
    let mut show_promo = use_signal(|| true);
    let mut show_consent = use_signal(|| false);

    let disclosure_path = settings.disclosure_path.clone();
    let disclosure = use_resource(move || {
        let path = disclosure_path.clone();
        async move { load_disclosure(path).await }
    });

    let open_consent = move |_: ()| {
        show_promo.set(false);
        show_consent.set(true);
    };

    let loaded: Option<Disclosure> = disclosure.read().as_ref().cloned();
    let current = status();

    let summary = match loaded.clone() {
        None => rsx! {
            div { class: "home-loading",
                FilterSkeleton {}
                CardSkeleton {}
                CardSkeleton {}
                div { class: "home-sidebar",
                    ListRowSkeleton {}
                    ListRowSkeleton {}
                    StatsSkeleton { rows: 5 }
                }
            }
        },
        Some(d) => rsx! {
            section { class: "consent-summary",
                h2 { class: "section-title", "{d.title}" }
                p { class: "consent-status {current.class()}",
                    "Status: {current.label()}"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: open_consent,
                    if current == ConsentStatus::Pending { "Review notice" } else { "Review again" }
                }
            }
        },
    };

    rsx! {
        div { class: "home-page",
            header { class: "home-header",
                h1 { class: "page-title", "Consent Gate" }
                ThemeToggle {
                    mode: mode(),
                    on_toggle: move |_| toggle_theme(mode),
                }
            }

            {summary}

            if show_promo() {
                PromoModal {
                    title: "Create your profile,".to_string(),
                    highlight: "let employers find you!".to_string(),
                    body: "Your profile looks empty right now. Build a professional one and catch every opportunity."
                        .to_string(),
                    features: promo_features(),
                    cta_label: "Get started".to_string(),
                    on_close: move |_| show_promo.set(false),
                    on_action: open_consent,
                }
            }

            if show_consent() {
                if let Some(d) = loaded {
                    ConsentModal {
                        disclosure: d,
                        threshold: settings.threshold,
                        on_approve: move |_| {
                            tracing::info!("Disclosure approved");
                            status.set(ConsentStatus::Approved);
                            show_consent.set(false);
                        },
                        on_cancel: move |_| {
                            tracing::info!("Disclosure declined");
                            status.set(ConsentStatus::Declined);
                            show_consent.set(false);
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels() {
        assert_eq!(ConsentStatus::default(), ConsentStatus::Pending);
        assert_eq!(ConsentStatus::Approved.label(), "Approved");
        assert_eq!(ConsentStatus::Declined.class(), "status-declined");
    }

    #[test]
    fn promo_has_features() {
        assert_eq!(promo_features().len(), 4);
    }
}
