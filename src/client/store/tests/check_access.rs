//! Tests for the check function.

use crate::client::store::access::{check, Access, Capability};
use crate::client::store::tests::{admin, member, session_with};

/// Tests capability checks with no authenticated user.
///
/// Verifies that an anonymous session is denied both member and admin
/// capabilities, so neither protected nor admin routes can render.
///
/// Expected: Deny for both capabilities
#[test]
fn denies_everything_without_user() {
    let session = session_with(None);

    assert_eq!(check(&session, Capability::Member), Access::Deny);
    assert_eq!(check(&session, Capability::Admin), Access::Deny);
}

/// Tests the member capability for an ordinary authenticated user.
///
/// Verifies that a logged-in non-admin user can reach protected routes.
///
/// Expected: Allow
#[test]
fn allows_member_capability_for_logged_in_user() {
    let session = session_with(Some(member()));

    assert_eq!(check(&session, Capability::Member), Access::Allow);
}

/// Tests the admin capability for an ordinary authenticated user.
///
/// Verifies that a logged-in non-admin user cannot reach admin routes.
///
/// Expected: Deny
#[test]
fn denies_admin_capability_for_member() {
    let session = session_with(Some(member()));

    assert_eq!(check(&session, Capability::Admin), Access::Deny);
}

/// Tests both capabilities for an admin user.
///
/// Verifies that an admin session passes both the login guard and the admin
/// guard, since admin routes nest one inside the other.
///
/// Expected: Allow for both capabilities
#[test]
fn allows_both_capabilities_for_admin() {
    let session = session_with(Some(admin()));

    assert_eq!(check(&session, Capability::Member), Access::Allow);
    assert_eq!(check(&session, Capability::Admin), Access::Allow);
}

/// Tests the admin flag helper against the session shape.
///
/// Verifies that the admin flag is only readable through a present user, so
/// a session can never report admin rights without being logged in.
///
/// Expected: is_admin implies is_logged_in
#[test]
fn admin_flag_requires_user() {
    let anonymous = session_with(None);
    let with_admin = session_with(Some(admin()));

    assert!(!anonymous.is_admin());
    assert!(with_admin.is_logged_in() && with_admin.is_admin());
}
