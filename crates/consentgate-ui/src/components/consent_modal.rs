//! Consent Modal Component
//!
//! Legal-disclosure overlay whose approve button stays disabled until the
//! reader has scrolled the notice to its end (or the notice fits on screen).
//!
//! Geometry comes from the scroll region's `MountedData` handle: when it
//! mounts, on every `resize` (which also covers a first layout that reported
//! no geometry yet) and on every `scroll` event. Measurement tasks are spawned
//! in this component's scope, so Dioxus cancels any in flight and drops the
//! region handle when the modal unmounts.

use std::rc::Rc;

use consentgate_core::{ConsentGate, Disclosure, ScrollMetrics, Section, DEFAULT_THRESHOLD};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

const LOCKED_LABEL: &str = "Please read the notice to the end...";
const UNLOCKED_LABEL: &str = "I have read and approve";

/// Approve button caption for the current gate state
pub fn approve_label(unlocked: bool) -> &'static str {
    if unlocked {
        UNLOCKED_LABEL
    } else {
        LOCKED_LABEL
    }
}

/// Read scroll offset, viewport and content height from the region.
///
/// Returns `None` if the renderer cannot answer yet; the gate then simply
/// stays as it is until the next event.
async fn measure(region: Rc<MountedData>) -> Option<ScrollMetrics> {
    let offset = region.get_scroll_offset().await.ok()?;
    let size = region.get_scroll_size().await.ok()?;
    let rect = region.get_client_rect().await.ok()?;
    Some(ScrollMetrics::new(offset.y, rect.size.height, size.height))
}

/// Consent Modal
///
/// Each host callback fires at most once, and never both: clicks are routed
/// through [`ConsentGate`], which records a single outcome.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ConsentModal {
///         disclosure: Disclosure::builtin(),
///         on_approve: move |_| consent.set(Some(true)),
///         on_cancel: move |_| consent.set(Some(false)),
///     }
/// }
/// ```
#[component]
pub fn ConsentModal(
    /// Notice to present (host-owned, never modified)
    disclosure: Disclosure,
    /// Distance from the bottom that counts as having reached the end
    #[props(default = DEFAULT_THRESHOLD)]
    threshold: f64,
    /// Called once when the reader approves an unlocked gate
    on_approve: EventHandler<()>,
    /// Called once when the reader dismisses
    on_cancel: EventHandler<()>,
) -> Element {
    let mut gate = use_signal(move || {
        ConsentGate::new(threshold).unwrap_or_else(|e| {
            tracing::warn!("{}, using default threshold", e);
            ConsentGate::default()
        })
    });
    let mut region = use_signal(|| Option::<Rc<MountedData>>::None);

    use_drop(|| tracing::debug!("Consent modal unmounted"));

    let handle_mounted = move |evt: MountedEvent| {
        let data = evt.data();
        region.set(Some(data.clone()));
        spawn(async move {
            if let Some(metrics) = measure(data).await {
                tracing::debug!(?metrics, "Consent region laid out");
                gate.write().observe_layout(metrics);
            }
        });
    };

    let handle_resize = move |_: ResizeEvent| {
        let Some(data) = region() else {
            return;
        };
        if gate.peek().is_unlocked() {
            return;
        }
        spawn(async move {
            if let Some(metrics) = measure(data).await {
                tracing::debug!(?metrics, "Consent region resized");
                gate.write().observe_resize(metrics);
            }
        });
    };

    let handle_scroll = move |_: ScrollEvent| {
        // Nothing to read until the region has mounted
        let Some(data) = region() else {
            return;
        };
        if gate.peek().is_unlocked() {
            return;
        }
        spawn(async move {
            if let Some(metrics) = measure(data).await {
                gate.write().observe_scroll(metrics);
            }
        });
    };

    let handle_approve = move |_: ()| {
        let outcome = gate.write().approve();
        if outcome.is_some() {
            on_approve.call(());
        }
    };

    let handle_cancel = move |_: ()| {
        let outcome = gate.write().cancel();
        if outcome.is_some() {
            on_cancel.call(());
        }
    };

    let unlocked = gate.read().is_unlocked();
    let approve_class = if unlocked {
        "consent-approve unlocked"
    } else {
        "consent-approve locked"
    };

    rsx! {
        div {
            class: "modal-overlay consent-overlay",
            role: "dialog",
            "aria-modal": "true",

            div { class: "consent-modal",
                // Header
                div { class: "consent-header",
                    h2 { class: "modal-title", "{disclosure.title}" }
                    if !disclosure.subtitle.is_empty() {
                        p { class: "consent-subtitle", "{disclosure.subtitle}" }
                    }
                }

                // Scrollable notice
                div {
                    class: "consent-body",
                    onmounted: handle_mounted,
                    onresize: handle_resize,
                    onscroll: handle_scroll,

                    div { class: "consent-prose",
                        if !disclosure.heading.is_empty() {
                            p { class: "consent-lead", "{disclosure.heading}" }
                        }
                        for (i, paragraph) in disclosure.intro.iter().enumerate() {
                            p { key: "intro-{i}", "{paragraph}" }
                        }
                        for (i, section) in disclosure.sections.iter().enumerate() {
                            DisclosureSection { key: "section-{i}", section: section.clone() }
                        }
                    }
                }

                // Actions
                div { class: "consent-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        class: "consent-cancel".to_string(),
                        onclick: handle_cancel,
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: approve_class.to_string(),
                        disabled: !unlocked,
                        onclick: handle_approve,
                        "{approve_label(unlocked)}"
                        if unlocked {
                            span { class: "check-mark", "aria-hidden": "true", "\u{2713}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DisclosureSection(section: Section) -> Element {
    rsx! {
        h4 { class: "consent-section-title", "{section.title}" }
        for (i, paragraph) in section.paragraphs.iter().enumerate() {
            p { key: "p-{i}", "{paragraph}" }
        }
        if !section.items.is_empty() {
            ul { class: "consent-list",
                for (i, item) in section.items.iter().enumerate() {
                    li { key: "item-{i}",
                        if let Some(label) = &item.label {
                            strong { "{label} " }
                        }
                        "{item.text}"
                    }
                }
            }
        }
    }
}
