//! Error types for the JobZee client.
//!
//! Every failure is caught by the action that triggered it and shown as a toast, so
//! both error types carry a `Display` suited for end users alongside the detail that
//! gets logged.

use thiserror::Error;

use crate::client::form::application::MAX_RESUME_BYTES;

/// Error from a request to the JobZee REST API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("Failed to send request: {0}")]
    Network(String),
    /// The API answered with a non-success status.
    ///
    /// `message` holds the `message` field of the error body when the body was JSON.
    #[error("Request failed with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        message: Option<String>,
    },
    /// A success response did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// A browser API used to build the request failed.
    #[error("Browser error: {0}")]
    Browser(String),
}

impl ApiError {
    /// Message shown to the user in an error toast
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            Self::Network(_) => "Network error. Please check your connection.".to_string(),
            _ => "Something went wrong.".to_string(),
        }
    }

    /// Whether the API rejected the request because the session is missing or expired
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// A form was submitted with missing or invalid input; nothing was sent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please fill in all required fields.")]
    MissingJobFields,
    #[error("Please select a salary type.")]
    MissingSalaryType,
    #[error("Please provide a fixed salary.")]
    MissingFixedSalary,
    #[error("Please provide both salary range values.")]
    MissingSalaryRange,
    #[error("Salary must be a non-negative number.")]
    InvalidSalary,
    #[error("'Salary From' cannot be greater than 'Salary To'.")]
    InvertedSalaryRange,
    #[error("Please fill out all required fields.")]
    MissingApplicationFields,
    #[error("Invalid file type. Please upload a PDF, JPG, or PNG file.")]
    InvalidResumeType,
    #[error("File size exceeds {}MB. Please upload a smaller file.", MAX_RESUME_BYTES / (1024 * 1024))]
    ResumeTooLarge,
}

#[cfg(test)]
mod tests {
    mod user_message_tests {
        use crate::client::error::ApiError;

        #[test]
        /// Expect server message to be shown as is
        fn test_user_message_from_server() {
            let err = ApiError::Status {
                status: 400,
                message: Some("Invalid Email Or Password.".to_string()),
            };

            assert_eq!(err.user_message(), "Invalid Email Or Password.");
        }

        #[test]
        /// Expect network failures to get the connection hint
        fn test_user_message_network() {
            let err = ApiError::Network("TypeError: Failed to fetch".to_string());

            assert_eq!(
                err.user_message(),
                "Network error. Please check your connection."
            );
        }

        #[test]
        /// Expect generic message for status without body and decode errors
        fn test_user_message_fallback() {
            let status = ApiError::Status {
                status: 500,
                message: None,
            };
            let decode = ApiError::Decode("missing field `jobs`".to_string());

            assert_eq!(status.user_message(), "Something went wrong.");
            assert_eq!(decode.user_message(), "Something went wrong.");
        }
    }

    mod validation_error_tests {
        use crate::client::error::ValidationError;

        #[test]
        /// Expect resume size message to name the limit in megabytes
        fn test_resume_too_large_message() {
            assert_eq!(
                ValidationError::ResumeTooLarge.to_string(),
                "File size exceeds 5MB. Please upload a smaller file."
            );
        }
    }
}
