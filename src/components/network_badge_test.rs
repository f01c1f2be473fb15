use super::*;

#[test]
fn badge_label_tracks_connectivity() {
    assert_eq!(badge_label(true), "Online");
    assert_eq!(badge_label(false), "Offline");
}

#[test]
fn badge_class_marks_offline_state() {
    assert!(badge_class(false).ends_with("--offline"));
    assert!(badge_class(true).ends_with("--online"));
}
