//! Route access guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route goes through [`RequireSession`], which evaluates
//! [`check`] against the live session on each navigation and session change.
//! The decision is a plain value; [`apply`] is the only place that turns a
//! denial into a navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionState, SessionStore};

/// Logical navigation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Home,
    About,
    Contact,
    Login,
}

impl Destination {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Login => "/login",
        }
    }

    /// Resolve a location path. Unknown paths fall through to `Home`.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "/about" => Self::About,
            "/contact" => Self::Contact,
            "/login" => Self::Login,
            _ => Self::Home,
        }
    }

    #[must_use]
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Home)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Permit,
    Deny { redirect: Destination },
}

impl Decision {
    #[must_use]
    pub fn is_permit(&self) -> bool {
        matches!(self, Self::Permit)
    }

    #[must_use]
    pub fn redirect(&self) -> Option<Destination> {
        match self {
            Self::Permit => None,
            Self::Deny { redirect } => Some(*redirect),
        }
    }
}

/// Decide whether `destination` may be entered with the given session.
#[must_use]
pub fn check(session: &SessionState, destination: Destination) -> Decision {
    if !destination.is_protected() || session.is_authenticated() {
        return Decision::Permit;
    }
    Decision::Deny { redirect: Destination::Login }
}

/// Carry out `decision`: navigate once on denial. Returns whether the
/// navigation may proceed.
pub fn apply<F>(decision: &Decision, navigate: &F) -> bool
where
    F: Fn(&str, NavigateOptions),
{
    match decision.redirect() {
        None => true,
        Some(target) => {
            log::debug!("guard: redirecting to {}", target.path());
            navigate(target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
            false
        }
    }
}

/// Render `children` only while the session may enter `destination`;
/// otherwise redirect.
#[component]
pub fn RequireSession(destination: Destination, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let state = session.state();
    let decision = Memo::new(move |_| state.with(|s| check(s, destination)));

    Effect::new(move || {
        apply(&decision.get(), &navigate);
    });

    view! { <Show when=move || decision.get().is_permit()>{children()}</Show> }
}
