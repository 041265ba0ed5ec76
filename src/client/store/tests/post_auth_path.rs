//! Tests for the post_auth_path function.

use crate::client::store::session::{post_auth_path, SessionState};
use crate::client::store::tests::{admin, member, session_with};

/// Tests the navigation target before the session bootstrap resolves.
///
/// Verifies that no redirect is suggested while the initial session lookup
/// is still in flight, so a page reload does not bounce the user.
///
/// Expected: None
#[test]
fn yields_nothing_before_bootstrap() {
    let session = SessionState::default();

    assert_eq!(post_auth_path(&session), None);
}

/// Tests the navigation target after logout.
///
/// Verifies that clearing the session sends the user to the landing path,
/// which the route table resolves to the catalog list.
///
/// Expected: "/"
#[test]
fn targets_landing_after_logout() {
    let session = session_with(None);

    assert_eq!(post_auth_path(&session), Some("/"));
}

/// Tests the navigation target after a member login.
///
/// Expected: "/books"
#[test]
fn targets_catalog_for_member() {
    let session = session_with(Some(member()));

    assert_eq!(post_auth_path(&session), Some("/books"));
}

/// Tests the navigation target after an admin login.
///
/// Expected: "/admin/books/"
#[test]
fn targets_admin_root_for_admin() {
    let session = session_with(Some(admin()));

    assert_eq!(post_auth_path(&session), Some("/admin/books/"));
}
