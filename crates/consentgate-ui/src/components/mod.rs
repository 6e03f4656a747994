//! Reusable UI components.

mod button;
mod consent_modal;
mod promo_modal;
mod skeleton;
mod theme_toggle;

pub use button::*;
pub use consent_modal::*;
pub use promo_modal::*;
pub use skeleton::*;
pub use theme_toggle::*;
