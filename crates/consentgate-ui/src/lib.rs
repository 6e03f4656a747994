//! Consent Gate UI Components
//!
//! Dioxus view fragments for the disclosure flow:
//!
//! - [`ConsentModal`]: scroll-gated legal notice with approve/cancel
//! - [`PromoModal`]: full-window promotional screen
//! - [`ThemeToggle`]: sun/moon button for the light/dark flag
//! - Skeleton placeholders shown while content loads
//!
//! Components only render state and forward clicks. Persistence and
//! navigation stay with the host shell.

pub mod components;

pub use components::*;
