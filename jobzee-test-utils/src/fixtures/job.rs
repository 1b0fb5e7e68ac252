use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use crate::constant::EMPLOYER_ID;

fn base_job(id: &str) -> Value {
    let posted = Utc
        .with_ymd_and_hms(2024, 5, 25, 12, 0, 0)
        .single()
        .map(|posted| posted.to_rfc3339())
        .unwrap_or_default();

    json!({
        "_id": id,
        "title": "Frontend Developer",
        "description": "Build the job board frontend",
        "category": "Frontend Web Development",
        "country": "India",
        "city": "Jaipur",
        "location": "Malviya Nagar",
        "expired": false,
        "jobPostedOn": posted,
        "postedBy": EMPLOYER_ID,
        "__v": 0
    })
}

/// Job document with a fixed salary
pub fn fixed_salary_job_json(id: &str, salary: f64) -> Value {
    let mut job = base_job(id);
    job["fixedSalary"] = json!(salary);
    job
}

/// Job document with a salary range
pub fn ranged_salary_job_json(id: &str, from: f64, to: f64) -> Value {
    let mut job = base_job(id);
    job["salaryFrom"] = json!(from);
    job["salaryTo"] = json!(to);
    job
}
