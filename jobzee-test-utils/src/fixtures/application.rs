use serde_json::{json, Value};

use crate::constant::{EMPLOYER_ID, JOB_ID, JOB_SEEKER_ID, RESUME_URL};

/// Application document submitted by the test job seeker to the test employer
pub fn application_json(id: &str) -> Value {
    json!({
        "_id": id,
        "name": "Test Applicant",
        "email": "applicant@example.com",
        "coverLetter": "I am a great fit for this role.",
        "phone": 9876543210u64,
        "address": "221B Baker Street",
        "resume": {
            "public_id": "resume_abc123",
            "url": RESUME_URL
        },
        "jobId": JOB_ID,
        "applicantID": { "user": JOB_SEEKER_ID, "role": "Job Seeker" },
        "employerID": { "user": EMPLOYER_ID, "role": "Employer" },
        "__v": 0
    })
}
