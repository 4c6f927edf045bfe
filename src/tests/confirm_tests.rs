use crate::controller::ConfirmGate;

#[test]
fn test_gate_starts_closed() {
    let gate = ConfirmGate::new();
    assert!(!gate.is_open());
    assert_eq!(gate.pending(), None);
}

#[test]
fn test_request_opens_with_target() {
    let mut gate = ConfirmGate::new();
    gate.request("42");
    assert!(gate.is_open());
    assert_eq!(gate.pending(), Some("42"));
}

#[test]
fn test_second_request_replaces_target() {
    let mut gate = ConfirmGate::new();
    gate.request("42");
    gate.request("43");
    assert_eq!(gate.pending(), Some("43"));
}

#[test]
fn test_cancel_discards_target() {
    let mut gate = ConfirmGate::new();
    gate.request("42");
    gate.cancel();
    assert!(!gate.is_open());
    assert_eq!(gate.take_pending(), None);
}

#[test]
fn test_take_pending_closes_gate() {
    let mut gate = ConfirmGate::new();
    gate.request("42");

    assert_eq!(gate.take_pending(), Some("42".to_string()));
    assert!(!gate.is_open());
    assert_eq!(gate.take_pending(), None);
}
