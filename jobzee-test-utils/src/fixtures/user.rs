use serde_json::{json, Value};

use crate::constant::{EMPLOYER_ID, JOB_SEEKER_ID};

/// User document for the given wire role name ("Employer" or "Job Seeker")
pub fn user_json(role: &str) -> Value {
    let id = if role == "Employer" {
        EMPLOYER_ID
    } else {
        JOB_SEEKER_ID
    };

    json!({
        "_id": id,
        "name": "Test User",
        "email": "test@example.com",
        "phone": 5551234567u64,
        "role": role,
        "createdAt": "2024-05-25T10:00:00.000Z",
        "__v": 0
    })
}

pub fn employer_json() -> Value {
    user_json("Employer")
}

pub fn job_seeker_json() -> Value {
    user_json("Job Seeker")
}
