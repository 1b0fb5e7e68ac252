//! Requests to the JobZee REST API.
//!
//! Every request carries the session cookie. Transport only exists in the browser
//! (`web` feature); other builds get an error so shared code can still call in.
//! Turning a status and body into a result is kept separate in [`decode_response`].

pub mod application;
pub mod job;
pub mod user;

use serde::de::DeserializeOwned;

use crate::{client::error::ApiError, model::api::ErrorDto};

/// Paths of the endpoints, relative to the configured base URL
pub mod path {
    pub const GET_USER: &str = "/api/v1/user/getuser";
    pub const LOGIN: &str = "/api/v1/user/login";
    pub const REGISTER: &str = "/api/v1/user/register";
    pub const LOGOUT: &str = "/api/v1/user/logout";
    pub const GET_ALL_JOBS: &str = "/api/v1/job/getall";
    pub const GET_MY_JOBS: &str = "/api/v1/job/getmyjobs";
    pub const POST_JOB: &str = "/api/v1/job/post";
    pub const POST_APPLICATION: &str = "/api/v1/application/post";
    pub const EMPLOYER_APPLICATIONS: &str = "/api/v1/application/employer/getall";
    pub const JOB_SEEKER_APPLICATIONS: &str = "/api/v1/application/jobseeker/getall";

    pub fn job(id: &str) -> String {
        format!("/api/v1/job/{}", id)
    }

    pub fn update_job(id: &str) -> String {
        format!("/api/v1/job/update/{}", id)
    }

    pub fn delete_job(id: &str) -> String {
        format!("/api/v1/job/delete/{}", id)
    }

    pub fn delete_application(id: &str) -> String {
        format!("/api/v1/application/delete/{}", id)
    }
}

/// Interpret a response by status and raw body
///
/// # Returns
/// - `Ok(T)`: 2xx status with a body matching `T`
/// - `Err(ApiError::Decode)`: 2xx status with a body that does not match `T`
/// - `Err(ApiError::Status)`: any other status; carries the `message` of a JSON error body
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<T>(body).map_err(|e| ApiError::Decode(e.to_string()));
    }

    let message = serde_json::from_str::<ErrorDto>(body)
        .ok()
        .map(|error_dto| error_dto.message);

    Err(ApiError::Status { status, message })
}

#[cfg(feature = "web")]
mod transport {
    use reqwasm::http::{Request, RequestCredentials};
    use serde::{de::DeserializeOwned, Serialize};

    use crate::client::{api::decode_response, config::Config, error::ApiError};

    async fn send<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
        let response = request
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_response(status, &body)
    }

    pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        let url = Config::from_env().endpoint(path);

        send(Request::get(&url)).await
    }

    pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = Config::from_env().endpoint(path);
        let body = serde_json::to_string(body).map_err(|e| ApiError::Browser(e.to_string()))?;

        send(
            Request::post(&url)
                .header("Content-Type", "application/json")
                .body(body),
        )
        .await
    }

    pub async fn post_form<T: DeserializeOwned>(
        path: &str,
        form: web_sys::FormData,
    ) -> Result<T, ApiError> {
        let url = Config::from_env().endpoint(path);

        // The browser sets the multipart boundary when no content type is given
        send(Request::post(&url).body(form)).await
    }
}

#[cfg(not(feature = "web"))]
mod transport {
    use serde::{de::DeserializeOwned, Serialize};

    use crate::client::error::ApiError;

    fn unavailable() -> ApiError {
        ApiError::Browser("HTTP requests are only available in the web build".to_string())
    }

    pub async fn get<T: DeserializeOwned>(_path: &str) -> Result<T, ApiError> {
        Err(unavailable())
    }

    pub async fn post_json<B, T>(_path: &str, _body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        Err(unavailable())
    }
}
