use std::cell::RefCell;
use std::collections::HashMap;

use futures::executor::block_on;
use serde_json::{Map, json};

use super::*;
use crate::util::lifecycle::Lifecycle;

#[derive(Default)]
struct FakeStore {
    docs: HashMap<String, Result<Option<Document>, StoreError>>,
    reads: RefCell<Vec<String>>,
    /// Invalidated after the first read to simulate an unmount mid-lookup.
    cancel_after_first_read: Option<Lifecycle>,
}

impl FakeStore {
    fn with(mut self, path: &str, result: Result<Option<Document>, StoreError>) -> Self {
        self.docs.insert(path.to_owned(), result);
        self
    }
}

impl DocumentStore for FakeStore {
    async fn get(&self, doc: &DocRef) -> Result<Option<Document>, StoreError> {
        self.reads.borrow_mut().push(doc.path());
        if let Some(lifecycle) = &self.cancel_after_first_read {
            lifecycle.invalidate();
        }
        self.docs.get(&doc.path()).cloned().unwrap_or(Ok(None))
    }
}

fn doc(fields: serde_json::Value) -> Option<Document> {
    let map: Map<String, serde_json::Value> = fields.as_object().cloned().unwrap_or_default();
    Some(Document::new(map))
}

#[derive(Default)]
struct Recorder {
    navigations: RefCell<Vec<String>>,
    notices: RefCell<Vec<Notice>>,
    events: RefCell<Vec<ChannelEvent>>,
}

impl Notifier for Recorder {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

impl ErrorSink for Recorder {
    fn publish(&self, event: ChannelEvent) {
        self.events.borrow_mut().push(event);
    }
}

fn run(store: &FakeStore, ticket: &Ticket, path: &str, rec: &Recorder) -> Option<UserRole> {
    let navigate = |target: &str| rec.navigations.borrow_mut().push(target.to_owned());
    let current_path = || path.to_owned();
    let effects = Effects { navigate: &navigate, current_path: &current_path, notifier: rec, errors: rec };
    block_on(run_role_resolution(store, "u1", ticket, &effects))
}

fn run_fresh(store: &FakeStore, path: &str) -> (Option<UserRole>, Recorder) {
    let lifecycle = Lifecycle::new();
    let ticket = lifecycle.begin();
    let rec = Recorder::default();
    let role = run(store, &ticket, path, &rec);
    (role, rec)
}

// =============================================================
// role_from_document
// =============================================================

#[test]
fn role_field_defaults_to_student_when_absent_or_falsy() {
    for fields in [json!({}), json!({ "role": null }), json!({ "role": "" }), json!({ "role": false }), json!({ "role": 0 })] {
        assert_eq!(role_from_document(&doc(fields).unwrap()), Ok(UserRole::Student));
    }
}

#[test]
fn role_field_parses_known_roles() {
    assert_eq!(role_from_document(&doc(json!({ "role": "faculty" })).unwrap()), Ok(UserRole::Faculty));
    assert_eq!(role_from_document(&doc(json!({ "role": "admin" })).unwrap()), Ok(UserRole::Admin));
}

#[test]
fn role_field_rejects_unknown_values() {
    assert!(role_from_document(&doc(json!({ "role": "janitor" })).unwrap()).is_err());
    assert!(role_from_document(&doc(json!({ "role": 3 })).unwrap()).is_err());
}

// =============================================================
// resolution flow
// =============================================================

#[test]
fn admin_roster_member_resolves_to_admin_and_skips_user_roster() {
    let store = FakeStore::default()
        .with("roles_admin/u1", Ok(doc(json!({}))))
        .with("users/u1", Ok(doc(json!({ "role": "faculty" }))));
    let (role, rec) = run_fresh(&store, "/");
    assert_eq!(role, Some(UserRole::Admin));
    assert_eq!(*rec.navigations.borrow(), vec!["/dashboard/admin".to_owned()]);
    assert_eq!(*store.reads.borrow(), vec!["roles_admin/u1".to_owned()]);
}

#[test]
fn admin_already_on_landing_route_does_not_navigate() {
    let store = FakeStore::default().with("roles_admin/u1", Ok(doc(json!({}))));
    let (role, rec) = run_fresh(&store, "/dashboard/admin");
    assert_eq!(role, Some(UserRole::Admin));
    assert!(rec.navigations.borrow().is_empty());
}

#[test]
fn faculty_record_resolves_to_faculty() {
    let store = FakeStore::default().with("users/u1", Ok(doc(json!({ "role": "faculty", "name": "Dr. Rao" }))));
    let (role, rec) = run_fresh(&store, "/login");
    assert_eq!(role, Some(UserRole::Faculty));
    assert_eq!(*rec.navigations.borrow(), vec!["/dashboard/faculty".to_owned()]);
    assert!(rec.notices.borrow().is_empty());
}

#[test]
fn record_without_role_resolves_to_student() {
    let store = FakeStore::default().with("users/u1", Ok(doc(json!({ "name": "Lin" }))));
    let (role, rec) = run_fresh(&store, "/dashboard/student");
    assert_eq!(role, Some(UserRole::Student));
    assert!(rec.navigations.borrow().is_empty());
}

#[test]
fn absent_from_both_rosters_denies_access() {
    let store = FakeStore::default();
    let (role, rec) = run_fresh(&store, "/dashboard/student");
    assert_eq!(role, None);
    let notices = rec.notices.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, ACCESS_DENIED_TITLE);
    assert_eq!(*rec.navigations.borrow(), vec!["/login".to_owned()]);
    assert!(rec.events.borrow().is_empty());
}

#[test]
fn unknown_role_value_denies_access() {
    let store = FakeStore::default().with("users/u1", Ok(doc(json!({ "role": "janitor" }))));
    let (role, rec) = run_fresh(&store, "/");
    assert_eq!(role, None);
    assert_eq!(rec.notices.borrow()[0].title, ACCESS_DENIED_TITLE);
    assert_eq!(*rec.navigations.borrow(), vec!["/login".to_owned()]);
}

#[test]
fn admin_permission_denied_is_silent_and_falls_through() {
    let store = FakeStore::default()
        .with("roles_admin/u1", Err(StoreError::PermissionDenied))
        .with("users/u1", Ok(doc(json!({ "role": "student" }))));
    let (role, rec) = run_fresh(&store, "/");
    assert_eq!(role, Some(UserRole::Student));
    assert!(rec.notices.borrow().is_empty());
    assert!(rec.events.borrow().is_empty());
    assert_eq!(store.reads.borrow().len(), 2);
}

#[test]
fn admin_other_failure_still_falls_through() {
    let store = FakeStore::default()
        .with("roles_admin/u1", Err(StoreError::Unavailable("offline".to_owned())))
        .with("users/u1", Ok(doc(json!({ "role": "faculty" }))));
    let (role, rec) = run_fresh(&store, "/");
    assert_eq!(role, Some(UserRole::Faculty));
    assert!(rec.notices.borrow().is_empty());
}

#[test]
fn user_permission_denied_emits_one_event_and_redirects() {
    let store = FakeStore::default()
        .with("roles_admin/u1", Err(StoreError::PermissionDenied))
        .with("users/u1", Err(StoreError::PermissionDenied));
    let (role, rec) = run_fresh(&store, "/");
    assert_eq!(role, None);
    assert_eq!(
        *rec.events.borrow(),
        vec![ChannelEvent::PermissionError(PermissionError::get("users/u1"))]
    );
    assert!(rec.notices.borrow().is_empty());
    assert_eq!(*rec.navigations.borrow(), vec!["/login".to_owned()]);
}

#[test]
fn user_other_failure_shows_generic_toast() {
    let store = FakeStore::default().with("users/u1", Err(StoreError::Other { status: 400, message: "bad".to_owned() }));
    let (role, rec) = run_fresh(&store, "/");
    assert_eq!(role, None);
    let notices = rec.notices.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, FETCH_FAILED_TITLE);
    assert_eq!(notices[0].description, FETCH_FAILED_DESCRIPTION);
    assert!(rec.events.borrow().is_empty());
    assert_eq!(*rec.navigations.borrow(), vec!["/login".to_owned()]);
}

// =============================================================
// cancellation
// =============================================================

#[test]
fn cancelled_between_reads_skips_second_read_and_effects() {
    let lifecycle = Lifecycle::new();
    let ticket = lifecycle.begin();
    let store = FakeStore { cancel_after_first_read: Some(lifecycle.clone()), ..FakeStore::default() }
        .with("users/u1", Ok(doc(json!({ "role": "faculty" }))));
    let rec = Recorder::default();
    let role = run(&store, &ticket, "/", &rec);
    assert_eq!(role, None);
    assert_eq!(store.reads.borrow().len(), 1);
    assert!(rec.navigations.borrow().is_empty());
    assert!(rec.notices.borrow().is_empty());
}

#[test]
fn stale_ticket_applies_nothing() {
    let lifecycle = Lifecycle::new();
    let ticket = lifecycle.begin();
    lifecycle.invalidate();
    let rec = Recorder::default();
    let navigate = |target: &str| rec.navigations.borrow_mut().push(target.to_owned());
    let current_path = || "/".to_owned();
    let effects = Effects { navigate: &navigate, current_path: &current_path, notifier: &rec, errors: &rec };
    for resolution in [
        Resolution::Resolved(UserRole::Admin),
        Resolution::Undetermined,
        Resolution::PermissionDenied(PermissionError::get("users/u1")),
        Resolution::Failed(StoreError::Malformed("x".to_owned())),
    ] {
        assert_eq!(apply_resolution(resolution, &ticket, &effects), None);
    }
    assert!(rec.navigations.borrow().is_empty());
    assert!(rec.notices.borrow().is_empty());
    assert!(rec.events.borrow().is_empty());
}
