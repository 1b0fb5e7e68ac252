use jobzee::{
    client::api::{decode_response, path},
    model::{api::ApplicationsResponseDto, user::Role},
};
use jobzee_test_utils::prelude::*;

#[test]
/// Expect applications to decode with resume and both parties
fn decodes_applications() -> Result<(), TestError> {
    let body = envelope::applications_response(vec![application::application_json(
        APPLICATION_ID,
    )])
    .to_string();

    let response: ApplicationsResponseDto = decode_response(200, &body)
        .map_err(|e| TestError::Unexpected(e.to_string()))?;

    let application = response
        .applications
        .first()
        .ok_or_else(|| TestError::Unexpected("no applications".to_string()))?;

    assert_eq!(application.id, APPLICATION_ID);
    assert_eq!(application.phone, "9876543210");
    assert_eq!(application.resume.url, RESUME_URL);
    assert_eq!(application.job_id.as_deref(), Some(JOB_ID));
    assert_eq!(
        application.applicant.as_ref().map(|p| p.role),
        Some(Role::JobSeeker)
    );
    assert_eq!(
        application.employer.as_ref().map(|p| p.user.as_str()),
        Some(EMPLOYER_ID)
    );

    Ok(())
}

#[test]
/// Expect delete path to embed the application id
fn builds_delete_path() {
    assert_eq!(
        path::delete_application(APPLICATION_ID),
        format!("/api/v1/application/delete/{}", APPLICATION_ID)
    );
}
