//! Property-based tests for ConsentGate
//!
//! Uses proptest to verify the unlock and single-outcome invariants over
//! arbitrary geometry and event sequences.

use consentgate_core::{ConsentGate, GateState, Outcome, ScrollMetrics};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Positive layout dimension
fn extent_strategy() -> impl Strategy<Value = f64> {
    1.0..5000.0f64
}

/// Events a reader or the environment can produce
#[derive(Debug, Clone)]
enum GateEvent {
    Layout(f64, f64),
    Scroll(f64),
    Approve,
    Cancel,
}

fn events_strategy(max_events: usize) -> impl Strategy<Value = Vec<GateEvent>> {
    prop::collection::vec(
        prop_oneof![
            1 => (extent_strategy(), extent_strategy()).prop_map(|(v, c)| GateEvent::Layout(v, c)),
            4 => (0.0..5000.0f64).prop_map(GateEvent::Scroll),
            1 => Just(GateEvent::Approve),
            1 => Just(GateEvent::Cancel),
        ],
        0..max_events,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Content that fits the viewport unlocks at mount with no scrolling
    #[test]
    fn fitting_content_unlocks_at_mount(viewport in extent_strategy(), ratio in 0.01..=1.0f64) {
        let mut gate = ConsentGate::default();
        let content = viewport * ratio;
        let state = gate.observe_layout(ScrollMetrics::new(0.0, viewport, content));
        prop_assert_eq!(state, GateState::Unlocked);
    }

    /// Once a scroll lands within the threshold the gate never locks again
    #[test]
    fn unlock_is_monotonic(
        viewport in extent_strategy(),
        extra in 100.0..5000.0f64,
        threshold in 0.0..100.0f64,
        later in prop::collection::vec(0.0..1.0f64, 0..20),
    ) {
        let content = viewport + extra;
        let mut gate = ConsentGate::new(threshold).unwrap();
        let bottom = content - viewport;
        gate.observe_scroll(ScrollMetrics::new(bottom, viewport, content));
        prop_assert!(gate.is_unlocked());

        for fraction in later {
            let state = gate.observe_scroll(ScrollMetrics::new(bottom * fraction, viewport, content));
            prop_assert_eq!(state, GateState::Unlocked);
        }
    }

    /// Scrolls that stay above the threshold never unlock
    #[test]
    fn scroll_above_threshold_stays_locked(
        viewport in extent_strategy(),
        gap in 51.0..5000.0f64,
        offset_fraction in 0.0..1.0f64,
    ) {
        let content = viewport + gap + 1000.0;
        let max_offset = content - viewport - gap;
        let mut gate = ConsentGate::default();
        gate.observe_layout(ScrollMetrics::new(0.0, viewport, content));
        gate.observe_scroll(ScrollMetrics::new(max_offset * offset_fraction, viewport, content));
        prop_assert_eq!(gate.state(), GateState::Locked);
    }

    /// Any event sequence yields at most one outcome, and approval only
    /// when the gate was unlocked
    #[test]
    fn at_most_one_outcome(events in events_strategy(40)) {
        let mut gate = ConsentGate::default();
        let mut approvals = 0;
        let mut cancellations = 0;

        for event in events {
            match event {
                GateEvent::Layout(v, c) => { gate.observe_layout(ScrollMetrics::new(0.0, v, c)); }
                GateEvent::Scroll(offset) => { gate.observe_scroll(ScrollMetrics::new(offset, 800.0, 3000.0)); }
                GateEvent::Approve => {
                    let was_unlocked = gate.is_unlocked();
                    if let Some(outcome) = gate.approve() {
                        prop_assert!(was_unlocked);
                        prop_assert_eq!(outcome, Outcome::Approved);
                        approvals += 1;
                    }
                }
                GateEvent::Cancel => {
                    if gate.cancel().is_some() {
                        cancellations += 1;
                    }
                }
            }
        }

        prop_assert!(approvals + cancellations <= 1);
        prop_assert_eq!(gate.is_concluded(), approvals + cancellations == 1);
    }
}
