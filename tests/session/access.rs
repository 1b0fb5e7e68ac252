use jobzee::client::{
    router::Route,
    store::session::SessionState,
    util::access::{Access, Requirement},
};
use jobzee_test_utils::prelude::*;

use crate::session::resolved_session;

const ALL_REQUIREMENTS: [Requirement; 5] = [
    Requirement::Guest,
    Requirement::Authenticated,
    Requirement::Employer,
    Requirement::JobSeeker,
    Requirement::AnyRole,
];

#[test]
/// Expect every view to wait while the startup request is in flight
fn pending_until_fetched() {
    let session = SessionState::default();

    for requirement in ALL_REQUIREMENTS {
        assert_eq!(Access::evaluate(&session, requirement), Access::Pending);
    }
}

#[test]
/// Expect visitors to reach only the guest views and be sent to login elsewhere
fn unauthenticated_visitor() {
    let mut session = SessionState::default();
    session.resolve(Err("not logged in"));

    assert_eq!(
        Access::evaluate(&session, Requirement::Guest),
        Access::Granted
    );
    for requirement in &ALL_REQUIREMENTS[1..] {
        assert_eq!(
            Access::evaluate(&session, *requirement),
            Access::Redirect(Route::Login {})
        );
    }
}

#[test]
/// Expect employers to be kept out of the application form only
fn employer_views() -> Result<(), TestError> {
    let session = resolved_session("Employer")?;

    let home = Access::Redirect(Route::Home {});
    assert_eq!(Access::evaluate(&session, Requirement::Guest), home);
    assert_eq!(Access::evaluate(&session, Requirement::JobSeeker), home);
    assert!(Access::evaluate(&session, Requirement::Authenticated).is_granted());
    assert!(Access::evaluate(&session, Requirement::Employer).is_granted());
    assert!(Access::evaluate(&session, Requirement::AnyRole).is_granted());

    Ok(())
}

#[test]
/// Expect job seekers to be kept out of the employer views
fn job_seeker_views() -> Result<(), TestError> {
    let session = resolved_session("Job Seeker")?;

    let home = Access::Redirect(Route::Home {});
    assert_eq!(Access::evaluate(&session, Requirement::Guest), home);
    assert_eq!(Access::evaluate(&session, Requirement::Employer), home);
    assert!(Access::evaluate(&session, Requirement::JobSeeker).is_granted());
    assert!(Access::evaluate(&session, Requirement::AnyRole).is_granted());

    Ok(())
}

#[test]
/// Expect a login response without a user to only grant role-independent views
fn authorized_without_user() {
    let mut session = SessionState::default();
    session.login(None);

    assert!(Access::evaluate(&session, Requirement::Authenticated).is_granted());
    assert!(Access::evaluate(&session, Requirement::JobSeeker).is_granted());
    assert_eq!(
        Access::evaluate(&session, Requirement::Employer),
        Access::Redirect(Route::Home {})
    );
    assert_eq!(
        Access::evaluate(&session, Requirement::AnyRole),
        Access::Redirect(Route::Home {})
    );
}
