//! Unit tests for server state domain types.

use super::ManualClock;
use crate::server_state::domain::{
    PersistedServerStateData, ServerState, ServerStateDomainError, ServerStateId,
};
use chrono::Duration;
use mockable::Clock;
use rstest::rstest;

// ── ServerStateId validation ───────────────────────────────────────

#[rstest]
#[case("api-1")]
#[case("Worker_EU")]
#[case("host.example:8080")]
fn valid_identifiers_are_accepted(#[case] raw: &str) {
    let id = ServerStateId::new(raw).expect("identifier should be valid");
    assert_eq!(id.as_str(), raw);
}

#[rstest]
fn identifier_is_trimmed_but_case_is_kept() {
    let id = ServerStateId::new("  Main  ").expect("identifier should be valid");
    assert_eq!(id.as_str(), "Main");
}

#[rstest]
#[case("")]
#[case("   ")]
fn empty_identifier_is_rejected(#[case] raw: &str) {
    assert_eq!(ServerStateId::new(raw), Err(ServerStateDomainError::EmptyId));
}

#[rstest]
fn overlong_identifier_is_rejected() {
    let raw = "x".repeat(256);
    assert!(matches!(
        ServerStateId::new(raw),
        Err(ServerStateDomainError::IdTooLong(_))
    ));
}

// ── ServerState lifecycle ──────────────────────────────────────────

#[rstest]
fn new_state_defaults_to_false_at_creation_time() {
    let clock = ManualClock::new();
    let id = ServerStateId::new("main").expect("valid id");

    let state = ServerState::new(id.clone(), &clock);

    assert_eq!(state.id(), &id);
    assert!(!state.status());
    assert_eq!(state.updated_at(), clock.utc());
}

#[rstest]
fn set_status_reports_change_and_touches_timestamp() {
    let clock = ManualClock::new();
    let mut state = ServerState::new(ServerStateId::new("main").expect("valid id"), &clock);
    clock.advance(Duration::minutes(5));

    let changed = state.set_status(true, &clock);

    assert!(changed);
    assert!(state.status());
    assert_eq!(state.updated_at(), clock.utc());
}

#[rstest]
fn setting_same_status_is_not_a_change() {
    let clock = ManualClock::new();
    let mut state = ServerState::new(ServerStateId::new("main").expect("valid id"), &clock);

    assert!(!state.set_status(false, &clock));
}

#[rstest]
fn from_persisted_restores_all_fields() {
    let clock = ManualClock::new();
    let data = PersistedServerStateData {
        id: ServerStateId::new("replica").expect("valid id"),
        status: true,
        updated_at: clock.utc(),
    };

    let state = ServerState::from_persisted(data.clone());

    assert_eq!(state.id(), &data.id);
    assert!(state.status());
    assert_eq!(state.updated_at(), data.updated_at);
}
