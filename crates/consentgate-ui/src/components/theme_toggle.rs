//! Theme toggle button.
//!
//! Shows a sun in light mode and a moon in dark mode. The flag itself lives
//! with the host; this only renders it and forwards clicks.

use consentgate_core::ThemeMode;
use dioxus::prelude::*;

/// Glyph for the current mode
pub fn theme_icon(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "\u{2600}",
        ThemeMode::Dark => "\u{263E}",
    }
}

#[component]
pub fn ThemeToggle(
    /// Current mode, owned by the host
    mode: ThemeMode,
    /// Called on every click
    on_toggle: EventHandler<()>,
) -> Element {
    let label = if mode.is_dark() {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            title: "{label}",
            "aria-label": "{label}",
            "data-mode": "{mode}",
            onclick: move |_| on_toggle.call(()),
            span { class: "theme-icon", "{theme_icon(mode)}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_per_mode() {
        assert_eq!(theme_icon(ThemeMode::Light), "\u{2600}");
        assert_eq!(theme_icon(ThemeMode::Dark), "\u{263E}");
    }
}
