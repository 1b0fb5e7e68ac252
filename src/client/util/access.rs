//! Render/redirect decisions for routed views.
//!
//! Role restrictions only exist in the client: a view that is not granted redirects
//! before any of its requests are issued.

use dioxus::prelude::*;

use crate::{
    client::{
        router::Route,
        store::session::{use_session, SessionState},
    },
    model::user::Role,
};

/// Who may see a view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    /// Only visitors that are not logged in, e.g. the login page
    Guest,
    Authenticated,
    Employer,
    /// Any authorized user that is not an employer
    JobSeeker,
    /// Authorized with a known user of either role
    AnyRole,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Access {
    /// The startup identity request has not completed yet
    Pending,
    Granted,
    Redirect(Route),
}

impl Access {
    pub fn evaluate(session: &SessionState, requirement: Requirement) -> Self {
        if !session.fetched {
            return Self::Pending;
        }

        let authorized = session.is_authorized;
        let role = session.role();

        match requirement {
            Requirement::Guest if authorized => Self::Redirect(Route::Home {}),
            Requirement::Guest => Self::Granted,
            _ if !authorized => Self::Redirect(Route::Login {}),
            Requirement::Authenticated => Self::Granted,
            Requirement::Employer => match role {
                Some(Role::Employer) => Self::Granted,
                _ => Self::Redirect(Route::Home {}),
            },
            Requirement::JobSeeker => match role {
                Some(Role::Employer) => Self::Redirect(Route::Home {}),
                _ => Self::Granted,
            },
            Requirement::AnyRole => match role {
                Some(_) => Self::Granted,
                None => Self::Redirect(Route::Home {}),
            },
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Evaluate `requirement` against the session and redirect when it is not met
///
/// The redirect re-runs whenever the session changes, e.g. after logout.
pub fn use_access(requirement: Requirement) -> Access {
    let session = use_session();
    let navigator = use_navigator();

    use_effect(move || {
        if let Access::Redirect(route) = Access::evaluate(&session.read(), requirement) {
            navigator.replace(route);
        }
    });

    // Bound so the read guard is dropped before `session`
    let access = Access::evaluate(&session.read(), requirement);
    access
}

/// Renders `children` only when `requirement` is granted
#[component]
pub fn Guard(requirement: Requirement, children: Element) -> Element {
    let access = use_access(requirement);

    if access.is_granted() {
        rsx!({ children })
    } else {
        rsx!(
            div { class: "min-h-screen flex items-center justify-center",
                span { class: "loading loading-spinner loading-lg" }
            }
        )
    }
}
