//! Per-navigation authorization decision.

use dp_core::{UserIdentity, UserRole};

pub const LOGIN_PATH: &str = "/login";

/// Outcome of evaluating a protected navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session restore has not finished; show the neutral waiting view.
    /// Never a redirect.
    Loading,
    /// Send the user elsewhere: the login entry point when unauthenticated,
    /// their own dashboard when their role does not match the route.
    Redirect(String),
    /// Role matches; render the requested view.
    Render,
}

impl std::fmt::Display for RouteDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Redirect(path) => write!(f, "redirect({path})"),
            Self::Render => write!(f, "render"),
        }
    }
}

/// Pure function of (loading, identity, required role). Transitions come only
/// from session store mutations, never from the guard itself.
pub fn evaluate_route(
    loading: bool,
    identity: Option<&UserIdentity>,
    required: UserRole,
) -> RouteDecision {
    if loading {
        return RouteDecision::Loading;
    }

    match identity {
        None => RouteDecision::Redirect(LOGIN_PATH.to_string()),
        Some(user) if user.user_type != required => {
            RouteDecision::Redirect(user.user_type.dashboard_path())
        }
        Some(_) => RouteDecision::Render,
    }
}
