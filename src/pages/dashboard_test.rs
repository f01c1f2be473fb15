use super::*;

#[test]
fn dashboard_heading_uses_role_label() {
    assert_eq!(dashboard_heading(UserRole::Admin), "Admin Dashboard");
    assert_eq!(dashboard_heading(UserRole::Faculty), "Faculty Dashboard");
    assert_eq!(dashboard_heading(UserRole::Student), "Student Dashboard");
}
