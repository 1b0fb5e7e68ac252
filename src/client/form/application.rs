use crate::client::{error::ValidationError, form::filled, util::file::FileInfo};

/// Content types accepted for a resume upload
pub const ALLOWED_RESUME_TYPES: [&str; 3] = ["application/pdf", "image/jpeg", "image/png"];

/// Largest accepted resume, 5 MiB
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

/// Id of the resume file input, used to read the picked file back from the DOM
pub const RESUME_INPUT_ID: &str = "resume";

/// Reject a picked resume with an unsupported type or size
pub fn check_resume(file: &FileInfo) -> Result<(), ValidationError> {
    if !ALLOWED_RESUME_TYPES.contains(&file.content_type.as_str()) {
        return Err(ValidationError::InvalidResumeType);
    }
    if file.size > MAX_RESUME_BYTES {
        return Err(ValidationError::ResumeTooLarge);
    }

    Ok(())
}

/// Text inputs of the application form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub cover_letter: String,
}

impl ApplicationForm {
    pub fn validate(&self, resume: Option<&FileInfo>) -> Result<(), ValidationError> {
        let required = [
            &self.name,
            &self.email,
            &self.phone,
            &self.address,
            &self.cover_letter,
        ];
        if !required.iter().all(|value| filled(value)) {
            return Err(ValidationError::MissingApplicationFields);
        }

        match resume {
            Some(resume) => check_resume(resume),
            None => Err(ValidationError::MissingApplicationFields),
        }
    }

    /// Text parts of the multipart body, the resume file is appended separately
    pub fn parts<'a>(&'a self, job_id: &'a str) -> [(&'static str, &'a str); 6] {
        [
            ("name", self.name.trim()),
            ("email", self.email.trim()),
            ("phone", self.phone.trim()),
            ("address", self.address.trim()),
            ("coverLetter", self.cover_letter.trim()),
            ("jobId", job_id),
        ]
    }
}
