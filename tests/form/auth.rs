use jobzee::{
    client::{
        error::ValidationError,
        form::auth::{LoginForm, RegisterForm},
    },
    model::user::Role,
};

#[test]
/// Expect login form with a role and credentials to build the request body
fn login_form_builds_body() {
    let form = LoginForm {
        role: "Employer".to_string(),
        email: "boss@example.com".to_string(),
        password: "secret".to_string(),
    };

    let dto = form.validate().unwrap();

    assert_eq!(dto.role, Role::Employer);
    assert_eq!(dto.email, "boss@example.com");
}

#[test]
/// Expect login form without a role to be rejected
fn login_form_requires_role() {
    let form = LoginForm {
        role: String::new(),
        email: "boss@example.com".to_string(),
        password: "secret".to_string(),
    };

    assert_eq!(form.validate(), Err(ValidationError::MissingFields));
}

#[test]
/// Expect register form to require a phone number
fn register_form_requires_phone() {
    let form = RegisterForm {
        role: "Job Seeker".to_string(),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        phone: "  ".to_string(),
        password: "secret".to_string(),
    };

    assert_eq!(form.validate(), Err(ValidationError::MissingFields));
}
