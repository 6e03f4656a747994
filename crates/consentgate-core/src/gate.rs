//! Scroll-gated consent acknowledgement.
//!
//! The gate starts [`GateState::Locked`] and unlocks once the reader has been
//! exposed to the full disclosure: either the text already fits the viewport
//! on first layout, or a scroll observation lands within `threshold` of the
//! bottom. Unlocking is permanent for the lifetime of the gate.
//!
//! ```text
//!   Locked ──(fits on layout | remaining <= threshold)──▶ Unlocked
//!     │                                                     │
//!     └──cancel──▶ Cancelled              approve/cancel ◀──┘
//! ```

use crate::error::{GateError, GateResult};

/// Distance from the bottom that still counts as "reached the end".
///
/// Scroll containers rarely report an exact zero remainder at the visual
/// bottom (sub-pixel rounding, elastic overscroll).
pub const DEFAULT_THRESHOLD: f64 = 50.0;

/// Whether the approve action is enactable
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GateState {
    /// Reader has not reached the end yet
    #[default]
    Locked,
    /// Reader has been exposed to the whole text
    Unlocked,
}

impl GateState {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, GateState::Unlocked)
    }
}

/// Terminal action taken by the reader
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Approved,
    Cancelled,
}

/// Geometry of the scrollable region at one instant
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ScrollMetrics {
    /// Distance the visible window has moved from the top of the content
    pub scroll_offset: f64,
    /// Height of the visible window
    pub viewport_height: f64,
    /// Height of the full content
    pub content_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_offset: f64, viewport_height: f64, content_height: f64) -> Self {
        Self {
            scroll_offset,
            viewport_height,
            content_height,
        }
    }

    /// Distance between the bottom of the visible window and the bottom of
    /// the content. Negative while overscrolled past the end.
    pub fn remaining(&self) -> f64 {
        self.content_height - (self.scroll_offset + self.viewport_height)
    }

    /// True once the region has actually been laid out.
    ///
    /// A zero-height viewport or content, or any non-finite value, means the
    /// environment has not reported real geometry yet.
    pub fn is_measured(&self) -> bool {
        self.scroll_offset.is_finite()
            && self.viewport_height.is_finite()
            && self.content_height.is_finite()
            && self.viewport_height > 0.0
            && self.content_height > 0.0
    }

    /// Content fits entirely inside the viewport, so scrolling is impossible.
    pub fn fits_viewport(&self) -> bool {
        self.is_measured() && self.content_height <= self.viewport_height
    }
}

/// Locked/unlocked state plus the single terminal outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsentGate {
    state: GateState,
    threshold: f64,
    outcome: Option<Outcome>,
}

impl Default for ConsentGate {
    fn default() -> Self {
        Self {
            state: GateState::Locked,
            threshold: DEFAULT_THRESHOLD,
            outcome: None,
        }
    }
}

impl ConsentGate {
    /// Create a locked gate with a custom end-of-text tolerance.
    pub fn new(threshold: f64) -> GateResult<Self> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(GateError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            ..Self::default()
        })
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state.is_unlocked()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_concluded(&self) -> bool {
        self.outcome.is_some()
    }

    /// Mount / first-layout check.
    ///
    /// Unlocks when the measured content already fits the viewport. Unmeasured
    /// geometry (e.g. `0 <= 0` before layout) leaves the gate locked.
    pub fn observe_layout(&mut self, metrics: ScrollMetrics) -> GateState {
        if self.is_concluded() {
            return self.state;
        }
        if metrics.fits_viewport() {
            self.unlock("content fits viewport");
        } else if !metrics.is_measured() {
            tracing::debug!(?metrics, "Ignoring unmeasured layout");
        }
        self.state
    }

    /// Scroll position update.
    pub fn observe_scroll(&mut self, metrics: ScrollMetrics) -> GateState {
        if self.is_concluded() || !metrics.is_measured() {
            return self.state;
        }
        if metrics.remaining() <= self.threshold {
            self.unlock("scrolled to end");
        }
        self.state
    }

    /// Region was resized (or first laid out late).
    ///
    /// A grown viewport can make the content fit, after which no scroll event
    /// can arrive, so both the fit and the end-of-text checks are re-run.
    pub fn observe_resize(&mut self, metrics: ScrollMetrics) -> GateState {
        self.observe_layout(metrics);
        self.observe_scroll(metrics)
    }

    /// Record approval. Returns `None` while locked or once concluded.
    #[must_use]
    pub fn approve(&mut self) -> Option<Outcome> {
        if self.is_concluded() || !self.is_unlocked() {
            return None;
        }
        self.conclude(Outcome::Approved)
    }

    /// Record cancellation. Available in any gate state, once.
    #[must_use]
    pub fn cancel(&mut self) -> Option<Outcome> {
        if self.is_concluded() {
            return None;
        }
        self.conclude(Outcome::Cancelled)
    }

    fn unlock(&mut self, reason: &str) {
        if self.state == GateState::Locked {
            tracing::debug!(reason, "Consent gate unlocked");
            self.state = GateState::Unlocked;
        }
    }

    fn conclude(&mut self, outcome: Outcome) -> Option<Outcome> {
        tracing::info!(?outcome, state = ?self.state, "Consent gate concluded");
        self.outcome = Some(outcome);
        self.outcome
    }
}
