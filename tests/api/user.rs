use jobzee::{
    client::api::decode_response,
    model::{
        api::{AuthResponseDto, MessageDto, UserResponseDto},
        user::Role,
    },
};
use jobzee_test_utils::prelude::*;

#[test]
/// Expect the identity response to decode with the numeric phone as text
fn decodes_get_user_response() -> Result<(), TestError> {
    let body = envelope::user_response(user::job_seeker_json()).to_string();

    let response: UserResponseDto = decode_response(200, &body)
        .map_err(|e| TestError::Unexpected(e.to_string()))?;

    assert_eq!(response.user.id, JOB_SEEKER_ID);
    assert_eq!(response.user.role, Role::JobSeeker);
    assert_eq!(response.user.phone, "5551234567");

    Ok(())
}

#[test]
/// Expect login response to carry the logged in user when present
fn decodes_login_response_with_user() -> Result<(), TestError> {
    let body =
        envelope::auth_response("User Logged In!", Some(user::employer_json())).to_string();

    let response: AuthResponseDto = decode_response(200, &body)
        .map_err(|e| TestError::Unexpected(e.to_string()))?;

    assert_eq!(response.message, "User Logged In!");
    assert_eq!(response.user.map(|u| u.role), Some(Role::Employer));

    Ok(())
}

#[test]
/// Expect login response without a user to decode with `user` unset
fn decodes_login_response_without_user() -> Result<(), TestError> {
    let body = envelope::auth_response("User Registered!", None).to_string();

    let response: AuthResponseDto = decode_response(201, &body)
        .map_err(|e| TestError::Unexpected(e.to_string()))?;

    assert!(response.user.is_none());

    Ok(())
}

#[test]
/// Expect logout message to decode
fn decodes_logout_response() -> Result<(), TestError> {
    let body = envelope::message_response("Logged Out Successfully.").to_string();

    let response: MessageDto = decode_response(200, &body)
        .map_err(|e| TestError::Unexpected(e.to_string()))?;

    assert_eq!(response.message, "Logged Out Successfully.");

    Ok(())
}
