//! Consent Gate Core Library
//!
//! UI-free logic behind the legal-disclosure modal.
//!
//! ## Overview
//!
//! A disclosure is shown inside a scrollable region. The approve action stays
//! locked until the reader has reached the end of the text, or the text fits
//! the viewport on first layout. Unlocking is one-way and the host receives at
//! most one terminal outcome.
//!
//! ## Quick Start
//!
//! ```
//! use consentgate_core::{ConsentGate, GateState, Outcome, ScrollMetrics};
//!
//! let mut gate = ConsentGate::default();
//! gate.observe_layout(ScrollMetrics::new(0.0, 800.0, 2000.0));
//! assert_eq!(gate.state(), GateState::Locked);
//! assert_eq!(gate.approve(), None);
//!
//! gate.observe_scroll(ScrollMetrics::new(1150.0, 800.0, 2000.0));
//! assert_eq!(gate.approve(), Some(Outcome::Approved));
//! ```

pub mod disclosure;
pub mod error;
pub mod gate;
pub mod theme;

// Re-exports
pub use disclosure::{Disclosure, ListItem, Section};
pub use error::{GateError, GateResult};
pub use gate::{ConsentGate, GateState, Outcome, ScrollMetrics, DEFAULT_THRESHOLD};
pub use theme::{Preferences, ThemeMode, ThemeStore, PREFERENCES_FILE};
