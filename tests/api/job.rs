use jobzee::{
    client::api::{decode_response, path},
    model::{
        api::{JobResponseDto, JobsResponseDto, MyJobsResponseDto},
        job::Salary,
    },
};
use jobzee_test_utils::prelude::*;

#[test]
/// Expect job list to decode with both salary shapes
fn decodes_job_list() -> Result<(), TestError> {
    let body = envelope::jobs_response(vec![
        job::fixed_salary_job_json("j1", 60000.0),
        job::ranged_salary_job_json("j2", 1000.0, 2000.0),
    ])
    .to_string();

    let response: JobsResponseDto = decode_response(200, &body)
        .map_err(|e| TestError::Unexpected(e.to_string()))?;

    assert_eq!(response.jobs.len(), 2);
    assert_eq!(response.jobs[0].salary(), Salary::Fixed(60000.0));
    assert_eq!(response.jobs[0].salary().to_string(), "$60000");
    assert_eq!(
        response.jobs[1].salary(),
        Salary::Range {
            from: Some(1000.0),
            to: Some(2000.0)
        }
    );
    assert_eq!(response.jobs[1].salary().to_string(), "$1000 - $2000");

    Ok(())
}

#[test]
/// Expect one job with a decimal salary not to break decoding of the whole list
fn decodes_job_list_with_decimal_salary() -> Result<(), TestError> {
    let body = envelope::jobs_response(vec![
        job::ranged_salary_job_json("j1", 1000.0, 2000.0),
        job::fixed_salary_job_json("j2", 45000.5),
    ])
    .to_string();

    let response: JobsResponseDto = decode_response(200, &body)
        .map_err(|e| TestError::Unexpected(e.to_string()))?;

    assert_eq!(response.jobs.len(), 2);
    assert_eq!(response.jobs[1].salary().to_string(), "$45000.5");

    Ok(())
}

#[test]
/// Expect an empty job list to decode to no jobs
fn decodes_empty_job_list() -> Result<(), TestError> {
    let body = envelope::jobs_response(Vec::new()).to_string();

    let response: JobsResponseDto = decode_response(200, &body)
        .map_err(|e| TestError::Unexpected(e.to_string()))?;

    assert!(response.jobs.is_empty());

    Ok(())
}

#[test]
/// Expect job details to decode with the posting employer and date
fn decodes_job_details() -> Result<(), TestError> {
    let body = envelope::job_response(job::fixed_salary_job_json(JOB_ID, 50000.0)).to_string();

    let response: JobResponseDto = decode_response(200, &body)
        .map_err(|e| TestError::Unexpected(e.to_string()))?;

    assert_eq!(response.job.id, JOB_ID);
    assert_eq!(response.job.posted_by.as_deref(), Some(EMPLOYER_ID));
    assert_eq!(response.job.posted_on_label(), "May 25, 2024");

    Ok(())
}

#[test]
/// Expect employer's own jobs to decode from the `myJobs` field
fn decodes_my_jobs() -> Result<(), TestError> {
    let body =
        envelope::my_jobs_response(vec![job::ranged_salary_job_json("j3", 10.0, 20.0)]).to_string();

    let response: MyJobsResponseDto = decode_response(200, &body)
        .map_err(|e| TestError::Unexpected(e.to_string()))?;

    assert_eq!(response.my_jobs.len(), 1);
    assert_eq!(response.my_jobs[0].id, "j3");

    Ok(())
}

#[test]
/// Expect job paths to embed the job id
fn builds_job_paths() {
    assert_eq!(path::job(JOB_ID), format!("/api/v1/job/{}", JOB_ID));
    assert_eq!(path::update_job("j1"), "/api/v1/job/update/j1");
    assert_eq!(path::delete_job("j1"), "/api/v1/job/delete/j1");
}
