//! End-to-end gate scenarios driven the way a host shell drives the modal.
//!
//! `Host` stands in for the application shell: it owns the two callbacks and
//! counts how often each one fires.

use consentgate_core::{ConsentGate, GateState, Outcome, ScrollMetrics, DEFAULT_THRESHOLD};

#[derive(Default)]
struct Host {
    approvals: usize,
    cancellations: usize,
}

impl Host {
    fn click_approve(&mut self, gate: &mut ConsentGate) {
        if let Some(Outcome::Approved) = gate.approve() {
            self.approvals += 1;
        }
    }

    fn click_cancel(&mut self, gate: &mut ConsentGate) {
        if let Some(Outcome::Cancelled) = gate.cancel() {
            self.cancellations += 1;
        }
    }
}

#[test]
fn scenario_a_unlocks_exactly_at_threshold() {
    let mut gate = ConsentGate::new(50.0).unwrap();
    gate.observe_layout(ScrollMetrics::new(0.0, 800.0, 2000.0));
    assert_eq!(gate.state(), GateState::Locked);

    let offsets = [0.0, 400.0, 900.0, 1150.0];
    let expected_remaining = [1200.0, 800.0, 300.0, 50.0];
    let expected_state = [
        GateState::Locked,
        GateState::Locked,
        GateState::Locked,
        GateState::Unlocked,
    ];

    for ((offset, remaining), state) in offsets
        .iter()
        .zip(expected_remaining.iter())
        .zip(expected_state.iter())
    {
        let metrics = ScrollMetrics::new(*offset, 800.0, 2000.0);
        assert_eq!(metrics.remaining(), *remaining);
        assert_eq!(gate.observe_scroll(metrics), *state, "offset {}", offset);
    }
}

#[test]
fn scenario_b_short_content_unlocks_at_mount() {
    let mut gate = ConsentGate::default();
    assert_eq!(
        gate.observe_layout(ScrollMetrics::new(0.0, 800.0, 400.0)),
        GateState::Unlocked
    );

    let mut host = Host::default();
    host.click_approve(&mut gate);
    assert_eq!(host.approvals, 1);
    assert_eq!(host.cancellations, 0);
}

#[test]
fn scenario_c_cancel_while_locked() {
    let mut gate = ConsentGate::default();
    gate.observe_layout(ScrollMetrics::new(0.0, 800.0, 2000.0));

    let mut host = Host::default();
    host.click_cancel(&mut gate);
    assert_eq!(host.cancellations, 1);
    assert_eq!(host.approvals, 0);

    // Done: nothing further transitions or reaches the host
    gate.observe_scroll(ScrollMetrics::new(1200.0, 800.0, 2000.0));
    host.click_approve(&mut gate);
    host.click_cancel(&mut gate);
    assert_eq!(gate.state(), GateState::Locked);
    assert_eq!(host.approvals, 0);
    assert_eq!(host.cancellations, 1);
}

#[test]
fn approve_clicks_while_locked_never_reach_host() {
    let mut gate = ConsentGate::default();
    let mut host = Host::default();

    for offset in [0.0, 300.0, 600.0] {
        gate.observe_scroll(ScrollMetrics::new(offset, 800.0, 2000.0));
        host.click_approve(&mut gate);
    }
    assert_eq!(host.approvals, 0);
    assert!(!gate.is_concluded());
}

#[test]
fn repeated_approve_fires_once() {
    let mut gate = ConsentGate::default();
    gate.observe_scroll(ScrollMetrics::new(1200.0, 800.0, 2000.0));

    let mut host = Host::default();
    host.click_approve(&mut gate);
    host.click_approve(&mut gate);
    host.click_cancel(&mut gate);
    assert_eq!(host.approvals, 1);
    assert_eq!(host.cancellations, 0);
}

#[test]
fn layout_before_measurement_stays_locked() {
    // Container reported before layout completed, then real geometry arrives
    let mut gate = ConsentGate::default();
    gate.observe_layout(ScrollMetrics::new(0.0, 0.0, 0.0));
    assert_eq!(gate.state(), GateState::Locked);

    gate.observe_layout(ScrollMetrics::new(0.0, 800.0, 2000.0));
    assert_eq!(gate.state(), GateState::Locked);
}

#[test]
fn unmeasured_layout_recovers_on_real_reading() {
    let mut gate = ConsentGate::default();
    gate.observe_layout(ScrollMetrics::new(0.0, 0.0, 0.0));
    assert_eq!(gate.state(), GateState::Locked);

    assert_eq!(
        gate.observe_layout(ScrollMetrics::new(0.0, 800.0, 400.0)),
        GateState::Unlocked
    );
}

#[test]
fn enlarged_window_unlocks_without_scrolling() {
    let mut gate = ConsentGate::default();
    gate.observe_layout(ScrollMetrics::new(0.0, 800.0, 2000.0));
    assert_eq!(gate.state(), GateState::Locked);

    // Region no longer overflows, so no scroll event will ever follow
    let grown = ScrollMetrics::new(0.0, 2100.0, 2000.0);
    assert!(grown.fits_viewport());
    assert_eq!(gate.observe_resize(grown), GateState::Unlocked);

    let mut host = Host::default();
    host.click_approve(&mut gate);
    assert_eq!(host.approvals, 1);
}

#[test]
fn elastic_overscroll_counts_as_end() {
    let mut gate = ConsentGate::default();
    gate.observe_scroll(ScrollMetrics::new(1260.0, 800.0, 2000.0));
    assert!(gate.is_unlocked());
}

#[test]
fn scroll_and_layout_commute() {
    let fits = ScrollMetrics::new(0.0, 800.0, 600.0);
    let bottom = ScrollMetrics::new(1200.0, 800.0, 2000.0);

    let mut a = ConsentGate::default();
    a.observe_layout(fits);
    a.observe_scroll(bottom);

    let mut b = ConsentGate::default();
    b.observe_scroll(bottom);
    b.observe_layout(fits);

    assert_eq!(a, b);
    assert_eq!(a.threshold(), DEFAULT_THRESHOLD);
}
