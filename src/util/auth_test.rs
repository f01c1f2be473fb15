use super::*;
use crate::net::types::Identity;

fn signed_in() -> AuthState {
    AuthState::settled(Some(Identity {
        uid: "u1".to_owned(),
        email: Some("ada@example.edu".to_owned()),
        display_name: Some("Ada".to_owned()),
        id_token: None,
    }))
}

#[test]
fn should_redirect_unauth_when_not_loading_and_identity_missing() {
    assert!(should_redirect_unauth(&AuthState::settled(None)));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_identity_exists() {
    assert!(!should_redirect_unauth(&signed_in()));
}

#[test]
fn gate_fires_exactly_once_per_signed_out_stretch() {
    let mut gate = SessionGate::default();
    let signed_out = AuthState::settled(None);
    assert!(!gate.observe(&AuthState::default()));
    assert!(gate.observe(&signed_out));
    assert!(!gate.observe(&signed_out));
    assert!(!gate.observe(&signed_out));
}

#[test]
fn gate_rearms_after_sign_in() {
    let mut gate = SessionGate::default();
    let signed_out = AuthState::settled(None);
    assert!(gate.observe(&signed_out));
    assert!(!gate.observe(&signed_in()));
    assert!(gate.observe(&signed_out));
}
