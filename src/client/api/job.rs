use crate::{
    client::{
        api::{path, transport},
        error::ApiError,
    },
    model::{
        api::{JobResponseDto, JobsResponseDto, MessageDto, MyJobsResponseDto},
        job::{JobDto, NewJobDto},
    },
};

pub async fn get_all_jobs() -> Result<Vec<JobDto>, ApiError> {
    let response: JobsResponseDto = transport::get(path::GET_ALL_JOBS).await?;

    Ok(response.jobs)
}

pub async fn get_job(id: &str) -> Result<JobDto, ApiError> {
    let response: JobResponseDto = transport::get(&path::job(id)).await?;

    Ok(response.job)
}

/// Jobs posted by the logged in employer
pub async fn get_my_jobs() -> Result<Vec<JobDto>, ApiError> {
    let response: MyJobsResponseDto = transport::get(path::GET_MY_JOBS).await?;

    Ok(response.my_jobs)
}

pub async fn post_job(job: &NewJobDto) -> Result<MessageDto, ApiError> {
    transport::post_json(path::POST_JOB, job).await
}

/// Send the full edited job document
pub async fn update_job(job: &JobDto) -> Result<MessageDto, ApiError> {
    transport::post_json(&path::update_job(&job.id), job).await
}

pub async fn delete_job(id: &str) -> Result<MessageDto, ApiError> {
    transport::post_json(&path::delete_job(id), &serde_json::json!({})).await
}
