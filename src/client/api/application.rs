use crate::{
    client::{
        api::{path, transport},
        error::ApiError,
        form::application::ApplicationForm,
    },
    model::{
        api::{ApplicationsResponseDto, MessageDto},
        application::ApplicationDto,
        user::Role,
    },
};

/// Applications visible to `role`
///
/// Employers get applications to their own jobs, job seekers their own submissions.
pub async fn get_applications(role: Role) -> Result<Vec<ApplicationDto>, ApiError> {
    let endpoint = match role {
        Role::Employer => path::EMPLOYER_APPLICATIONS,
        Role::JobSeeker => path::JOB_SEEKER_APPLICATIONS,
    };
    let response: ApplicationsResponseDto = transport::get(endpoint).await?;

    Ok(response.applications)
}

pub async fn delete_application(id: &str) -> Result<MessageDto, ApiError> {
    transport::post_json(&path::delete_application(id), &serde_json::json!({})).await
}

/// Submit an application for `job_id` as multipart form data
///
/// The resume is read from the file input with id `resume_input_id`.
#[cfg(feature = "web")]
pub async fn post_application(
    form: &ApplicationForm,
    job_id: &str,
    resume_input_id: &str,
) -> Result<MessageDto, ApiError> {
    use crate::client::util::file::selected_file;

    let browser_error = |e: wasm_bindgen::JsValue| ApiError::Browser(format!("{:?}", e));

    let resume = selected_file(resume_input_id)
        .ok_or_else(|| ApiError::Browser("No resume file selected".to_string()))?;

    let body = web_sys::FormData::new().map_err(browser_error)?;
    for (name, value) in form.parts(job_id) {
        body.append_with_str(name, value).map_err(browser_error)?;
    }
    body.append_with_blob("resume", &resume)
        .map_err(browser_error)?;

    transport::post_form(path::POST_APPLICATION, body).await
}

#[cfg(not(feature = "web"))]
pub async fn post_application(
    _form: &ApplicationForm,
    _job_id: &str,
    _resume_input_id: &str,
) -> Result<MessageDto, ApiError> {
    Err(ApiError::Browser(
        "File uploads are only available in the web build".to_string(),
    ))
}
