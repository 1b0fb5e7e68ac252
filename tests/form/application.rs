use jobzee::client::{
    error::ValidationError,
    form::application::{check_resume, ApplicationForm, MAX_RESUME_BYTES},
    util::file::FileInfo,
};

fn resume(content_type: &str, size: u64) -> FileInfo {
    FileInfo {
        name: "resume".to_string(),
        content_type: content_type.to_string(),
        size,
    }
}

fn filled_form() -> ApplicationForm {
    ApplicationForm {
        name: "Test Applicant".to_string(),
        email: "applicant@example.com".to_string(),
        phone: "9876543210".to_string(),
        address: "221B Baker Street".to_string(),
        cover_letter: "I am a great fit.".to_string(),
    }
}

#[test]
/// Expect pdf, jpeg and png resumes within the size limit to pass
fn accepts_allowed_resumes() {
    for content_type in ["application/pdf", "image/jpeg", "image/png"] {
        assert_eq!(check_resume(&resume(content_type, MAX_RESUME_BYTES)), Ok(()));
    }
}

#[test]
/// Expect other file types and oversized files to be rejected
fn rejects_invalid_resumes() {
    assert_eq!(
        check_resume(&resume("image/webp", 10)),
        Err(ValidationError::InvalidResumeType)
    );
    assert_eq!(
        check_resume(&resume("image/png", MAX_RESUME_BYTES + 1)),
        Err(ValidationError::ResumeTooLarge)
    );
}

#[test]
/// Expect a complete form to still require a resume
fn requires_resume() {
    let form = filled_form();

    assert_eq!(
        form.validate(None),
        Err(ValidationError::MissingApplicationFields)
    );
    assert_eq!(form.validate(Some(&resume("application/pdf", 1024))), Ok(()));
}

#[test]
/// Expect multipart parts to use the backend's field names
fn multipart_field_names() {
    let form = filled_form();

    let names: Vec<&str> = form.parts("j1").iter().map(|(name, _)| *name).collect();

    assert_eq!(
        names,
        ["name", "email", "phone", "address", "coverLetter", "jobId"]
    );
}
