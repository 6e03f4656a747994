use consentgate_core::ThemeMode;
use dioxus::prelude::*;

use crate::context::get_settings;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, settings and the theme flag, and stamps the
/// current mode onto the root element as `data-theme`.
#[component]
pub fn App() -> Element {
    let settings = use_hook(get_settings);
    let mode: Signal<ThemeMode> = use_signal(|| crate::get_theme_store().mode());

    use_context_provider(|| settings);
    use_context_provider(|| mode);

    let current = mode();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-root", "data-theme": "{current}",
            Home {}
        }
    }
}
