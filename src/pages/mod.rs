//! Page components for Consent Gate.

mod home;

pub use home::Home;
