use jobzee::{
    client::{api::decode_response, error::ApiError},
    model::api::JobsResponseDto,
};
use jobzee_test_utils::prelude::*;

#[test]
/// Expect the backend error message to become the toast text
fn error_body_message() {
    let body = envelope::error_response("Job not found.").to_string();

    let result = decode_response::<JobsResponseDto>(404, &body);

    let err = result.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 404,
            message: Some("Job not found.".to_string())
        }
    );
    assert_eq!(err.user_message(), "Job not found.");
}

#[test]
/// Expect a non-JSON error page to produce the generic message
fn non_json_error_body() {
    let result = decode_response::<JobsResponseDto>(502, "<html>Bad Gateway</html>");

    let err = result.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 502,
            message: None
        }
    );
    assert_eq!(err.user_message(), "Something went wrong.");
}

#[test]
/// Expect an unauthorized status to be recognized for session handling
fn unauthorized_status() {
    let body = envelope::error_response("User Not Authorized").to_string();

    let err = decode_response::<JobsResponseDto>(401, &body).unwrap_err();

    assert!(err.is_unauthorized());
}

#[test]
/// Expect a success status with an unexpected body to be a decode error
fn malformed_success_body() {
    let body = envelope::message_response("ok").to_string();

    let result = decode_response::<jobzee::model::api::UserResponseDto>(200, &body);

    assert!(matches!(result, Err(ApiError::Decode(_))));
}
