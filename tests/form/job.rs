use jobzee::client::{
    error::ValidationError,
    form::job::{JobForm, SalaryType},
};

fn job_form() -> JobForm {
    JobForm {
        title: "Backend Developer".to_string(),
        description: "Maintain the job board API".to_string(),
        category: "MERN Stack Development".to_string(),
        country: "India".to_string(),
        city: "Jaipur".to_string(),
        location: "Malviya Nagar".to_string(),
        ..JobForm::default()
    }
}

#[test]
/// Expect the salary type select values to map back to salary types
fn salary_type_select_values() {
    for kind in SalaryType::ALL {
        assert_eq!(SalaryType::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(SalaryType::parse("default"), None);
}

#[test]
/// Expect inverted range to show the range message
fn inverted_range_message() {
    let mut form = job_form();
    form.salary_type = SalaryType::Ranged.as_str().to_string();
    form.salary_from = "5000".to_string();
    form.salary_to = "100".to_string();

    let err = form.validate().unwrap_err();

    assert_eq!(err, ValidationError::InvertedSalaryRange);
    assert_eq!(
        err.to_string(),
        "'Salary From' cannot be greater than 'Salary To'."
    );
}

#[test]
/// Expect the post body to carry a fixed salary only
fn fixed_salary_body() {
    let mut form = job_form();
    form.salary_type = SalaryType::Fixed.as_str().to_string();
    form.fixed_salary = "45000".to_string();

    let body = serde_json::to_value(form.validate().unwrap()).unwrap();

    assert_eq!(body["fixedSalary"], 45000.0);
    assert!(body.get("salaryFrom").map_or(true, |v| v.is_null()));
}
