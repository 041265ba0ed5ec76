//! Pure capability gate for route guards.
//!
//! Guard components stay thin wrappers; the allow/deny decision itself is an
//! ordinary function of the session so it can be tested without a renderer.

use crate::client::store::session::SessionState;

/// Capability a route can require before rendering its screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Any authenticated user.
    Member,
    /// An authenticated user with the admin flag.
    Admin,
}

/// Outcome of a capability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny,
}

/// Decides whether the session satisfies the required capability.
pub fn check(session: &SessionState, required: Capability) -> Access {
    let allowed = match required {
        Capability::Member => session.is_logged_in(),
        Capability::Admin => session.is_admin(),
    };

    if allowed {
        Access::Allow
    } else {
        Access::Deny
    }
}
