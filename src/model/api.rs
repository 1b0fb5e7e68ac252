use serde::{Deserialize, Serialize};

use crate::model::{application::ApplicationDto, job::JobDto, user::UserDto};

/// The response when an error occurs with an API request
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
}

/// Response carrying only a confirmation message, e.g. after a delete
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

/// Response of `GET /api/v1/user/getuser`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserResponseDto {
    pub user: UserDto,
}

/// Response of the login and register endpoints
///
/// `user` is optional since some backend versions only set the session cookie.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthResponseDto {
    pub message: String,
    #[serde(default)]
    pub user: Option<UserDto>,
}

/// Response of `GET /api/v1/job/getall`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct JobsResponseDto {
    #[serde(default)]
    pub jobs: Vec<JobDto>,
}

/// Response of `GET /api/v1/job/:id`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JobResponseDto {
    pub job: JobDto,
}

/// Response of `GET /api/v1/job/getmyjobs`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MyJobsResponseDto {
    #[serde(rename = "myJobs", default)]
    pub my_jobs: Vec<JobDto>,
}

/// Response of both application listing endpoints
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ApplicationsResponseDto {
    #[serde(default)]
    pub applications: Vec<ApplicationDto>,
}
