//! Route-guard evaluation over the session read model.
//!
//! The navigation layer owns the actual redirects; this module only decides
//! what a protected route should do with the current session, so every route
//! applies identical gating.

use fluxbank_core::{SessionPhase, SessionSnapshot};

/// Access requirement attached to a protected route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteRequirement {
    /// Route is restricted to admin users.
    pub admin_only: bool,
}

impl RouteRequirement {
    /// Any signed-in user may enter.
    #[must_use]
    pub const fn authenticated() -> Self {
        Self { admin_only: false }
    }

    /// Only admin users may enter.
    #[must_use]
    pub const fn admin_only() -> Self {
        Self { admin_only: true }
    }
}

/// What a protected route should do with the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the route.
    Allow,
    /// Session is still restoring; hold rendering.
    Wait,
    /// Send the visitor to the auth entry point.
    RedirectToAuth,
    /// Signed in but not allowed here; send to the main view.
    RedirectHome,
}

/// Decide what a protected route should do with the current session.
#[must_use]
pub fn evaluate(snapshot: &SessionSnapshot, requirement: RouteRequirement) -> GuardDecision {
    match snapshot.phase {
        SessionPhase::Uninitialized | SessionPhase::Loading => GuardDecision::Wait,
        SessionPhase::Unauthenticated => GuardDecision::RedirectToAuth,
        SessionPhase::Authenticated => {
            let is_admin = snapshot.identity.as_ref().is_some_and(|i| i.is_admin);
            if requirement.admin_only && !is_admin {
                GuardDecision::RedirectHome
            } else {
                GuardDecision::Allow
            }
        }
    }
}
