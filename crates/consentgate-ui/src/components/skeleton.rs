//! Loading placeholders.
//!
//! Pulsing grey blocks roughly shaped like the content they stand in for.

use dioxus::prelude::*;

/// Profile-card placeholder: photo block plus title, subtitle and tag pills
#[component]
pub fn CardSkeleton() -> Element {
    rsx! {
        div { class: "skeleton skeleton-card", "aria-busy": "true",
            div { class: "skeleton-block skeleton-photo" }
            div { class: "skeleton-lines",
                div { class: "skeleton-block skeleton-line w-3-4" }
                div { class: "skeleton-block skeleton-line w-1-2" }
                div { class: "skeleton-pills",
                    for i in 0..3 {
                        div { key: "{i}", class: "skeleton-block skeleton-pill" }
                    }
                }
            }
        }
    }
}

/// Compact list row: avatar circle and two lines
#[component]
pub fn ListRowSkeleton() -> Element {
    rsx! {
        div { class: "skeleton skeleton-row", "aria-busy": "true",
            div { class: "skeleton-block skeleton-avatar" }
            div { class: "skeleton-lines",
                div { class: "skeleton-block skeleton-line w-3-4" }
                div { class: "skeleton-block skeleton-line thin w-1-2" }
            }
        }
    }
}

/// Label/value rows
#[component]
pub fn StatsSkeleton(#[props(default = 5)] rows: usize) -> Element {
    rsx! {
        div { class: "skeleton skeleton-stats", "aria-busy": "true",
            for i in 0..rows {
                div { key: "{i}", class: "skeleton-stat-row",
                    div { class: "skeleton-block skeleton-stat-label" }
                    div { class: "skeleton-block skeleton-stat-value" }
                }
            }
        }
    }
}

/// Search bar and filter chips
#[component]
pub fn FilterSkeleton() -> Element {
    rsx! {
        div { class: "skeleton skeleton-filters", "aria-busy": "true",
            div { class: "skeleton-block skeleton-search" }
            div { class: "skeleton-chips",
                for i in 0..3 {
                    div { key: "{i}", class: "skeleton-block skeleton-chip" }
                }
            }
        }
    }
}
