use serde_json::{json, Value};

pub fn user_response(user: Value) -> Value {
    json!({ "success": true, "user": user })
}

/// Login/register response; the backend also returns a token mirrored in the cookie
pub fn auth_response(message: &str, user: Option<Value>) -> Value {
    match user {
        Some(user) => json!({ "success": true, "message": message, "user": user, "token": "jwt" }),
        None => json!({ "success": true, "message": message }),
    }
}

pub fn message_response(message: &str) -> Value {
    json!({ "success": true, "message": message })
}

pub fn jobs_response(jobs: Vec<Value>) -> Value {
    json!({ "success": true, "jobs": jobs })
}

pub fn job_response(job: Value) -> Value {
    json!({ "success": true, "job": job })
}

pub fn my_jobs_response(jobs: Vec<Value>) -> Value {
    json!({ "success": true, "myJobs": jobs })
}

pub fn applications_response(applications: Vec<Value>) -> Value {
    json!({ "success": true, "applications": applications })
}

/// Body the backend's error middleware sends with non-2xx statuses
pub fn error_response(message: &str) -> Value {
    json!({ "success": false, "message": message })
}
