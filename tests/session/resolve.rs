use jobzee::{
    client::{error::ApiError, store::session::SessionState},
    model::user::Role,
};
use jobzee_test_utils::prelude::*;

use crate::session::resolved_session;

#[test]
/// Expect a resolved employer session to be authorized with the fixture user
fn resolves_employer_session() -> Result<(), TestError> {
    let session = resolved_session("Employer")?;

    assert!(session.fetched);
    assert!(session.is_authorized);
    assert!(session.is_employer());
    assert_eq!(session.user.as_ref().map(|u| u.id.as_str()), Some(EMPLOYER_ID));
    assert_eq!(session.user.as_ref().map(|u| u.phone.as_str()), Some("5551234567"));

    Ok(())
}

#[test]
/// Expect a failed startup request to clear a previously authorized session
fn failed_request_clears_session() -> Result<(), TestError> {
    let mut session = resolved_session("Job Seeker")?;

    session.resolve(Err(ApiError::Network("offline".to_string())));

    assert!(session.fetched);
    assert!(!session.is_authorized);
    assert!(session.user.is_none());

    Ok(())
}

#[test]
/// Expect an unauthorized response to be treated like any other failure
fn unauthorized_response_is_unauthenticated() {
    let mut session = SessionState::default();

    session.resolve(Err(ApiError::Status {
        status: 401,
        message: Some("User Not Authorized".to_string()),
    }));

    assert_eq!(
        session,
        SessionState {
            is_authorized: false,
            user: None,
            fetched: true,
        }
    );
}

#[test]
/// Expect logout to clear the user but keep the session marked as fetched
fn logout_after_resolve() -> Result<(), TestError> {
    let mut session = resolved_session("Employer")?;

    session.logout();

    assert!(session.fetched);
    assert!(!session.is_authorized);
    assert_eq!(session.role(), None);

    Ok(())
}

#[test]
/// Expect login with a user from the response to switch the session to that user
fn login_replaces_user() -> Result<(), TestError> {
    let mut session = resolved_session("Employer")?;
    session.logout();

    let seeker = serde_json::from_value(user::job_seeker_json())?;
    session.login(Some(seeker));

    assert!(session.is_authorized);
    assert_eq!(session.role(), Some(Role::JobSeeker));

    Ok(())
}
