use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::model::user::{Role, UserDto};

/// Login state of the current page, shared with every routed view
///
/// `fetched` stays false until the startup identity request has completed so that
/// views can tell "not yet known" apart from "not logged in".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub is_authorized: bool,
    pub user: Option<UserDto>,
    pub fetched: bool,
}

impl SessionState {
    /// Apply the result of the startup identity request
    ///
    /// Any error, including network failures, leaves the session unauthenticated.
    pub fn resolve<E: std::fmt::Display>(&mut self, result: Result<UserDto, E>) {
        match result {
            Ok(user) => {
                tracing::debug!("Session resolved for user {}", user.id);

                self.is_authorized = true;
                self.user = Some(user);
            }
            Err(err) => {
                tracing::debug!("Session resolved as unauthenticated: {}", err);

                self.is_authorized = false;
                self.user = None;
            }
        }
        self.fetched = true;
    }

    /// Mark the session authorized after a successful login or registration
    pub fn login(&mut self, user: Option<UserDto>) {
        self.is_authorized = true;
        if user.is_some() {
            self.user = user;
        }
        self.fetched = true;
    }

    pub fn logout(&mut self) {
        self.is_authorized = false;
        self.user = None;
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn is_employer(&self) -> bool {
        self.role() == Some(Role::Employer)
    }
}

/// Session provided by the root `App` component
pub fn use_session() -> Store<SessionState> {
    use_context::<Store<SessionState>>()
}

#[cfg(test)]
mod tests {
    use crate::model::user::{Role, UserDto};

    fn user(role: Role) -> UserDto {
        UserDto {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "5551234".to_string(),
            role,
        }
    }

    mod resolve_tests {
        use super::user;
        use crate::{client::store::session::SessionState, model::user::Role};

        #[test]
        /// Expect authorized session with user when identity request succeeds
        fn test_resolve_ok() {
            let mut session = SessionState::default();

            session.resolve::<String>(Ok(user(Role::Employer)));

            assert!(session.is_authorized);
            assert!(session.fetched);
            assert_eq!(session.role(), Some(Role::Employer));
        }

        #[test]
        /// Expect error to clear a previously authorized session
        fn test_resolve_err_clears_session() {
            let mut session = SessionState {
                is_authorized: true,
                user: Some(user(Role::JobSeeker)),
                fetched: false,
            };

            session.resolve::<&str>(Err("User Not Authorized"));

            assert!(!session.is_authorized);
            assert!(session.user.is_none());
            assert!(session.fetched);
        }
    }

    mod login_logout_tests {
        use super::user;
        use crate::{client::store::session::SessionState, model::user::Role};

        #[test]
        /// Expect login without user payload to keep any known user
        fn test_login_without_user() {
            let mut session = SessionState::default();
            session.user = Some(user(Role::JobSeeker));

            session.login(None);

            assert!(session.is_authorized);
            assert_eq!(session.role(), Some(Role::JobSeeker));
        }

        #[test]
        /// Expect logout to drop authorization and user but keep fetched
        fn test_logout() {
            let mut session = SessionState::default();
            session.login(Some(user(Role::Employer)));

            session.logout();

            assert!(!session.is_authorized);
            assert!(session.user.is_none());
            assert!(session.fetched);
            assert!(!session.is_employer());
        }
    }
}
