use crate::{
    client::{error::ValidationError, form::filled},
    model::job::NewJobDto,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SalaryType {
    Fixed,
    Ranged,
}

impl SalaryType {
    pub const ALL: [SalaryType; 2] = [SalaryType::Fixed, SalaryType::Ranged];

    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryType::Fixed => "Fixed Salary",
            SalaryType::Ranged => "Ranged Salary",
        }
    }

    /// Parse the value of the salary type select
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

/// State of the post job form, every input kept as typed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub country: String,
    pub city: String,
    pub location: String,
    pub salary_type: String,
    pub fixed_salary: String,
    pub salary_from: String,
    pub salary_to: String,
}

fn parse_salary(value: &str) -> Result<f64, ValidationError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
        .ok_or(ValidationError::InvalidSalary)
}

impl JobForm {
    pub fn salary_type(&self) -> Option<SalaryType> {
        SalaryType::parse(&self.salary_type)
    }

    pub fn validate(&self) -> Result<NewJobDto, ValidationError> {
        let required = [
            &self.title,
            &self.description,
            &self.category,
            &self.country,
            &self.city,
            &self.location,
        ];
        if !required.iter().all(|value| filled(value)) {
            return Err(ValidationError::MissingJobFields);
        }

        let (fixed_salary, salary_from, salary_to) = match self.salary_type() {
            None => return Err(ValidationError::MissingSalaryType),
            Some(SalaryType::Fixed) => {
                if !filled(&self.fixed_salary) {
                    return Err(ValidationError::MissingFixedSalary);
                }
                (Some(parse_salary(&self.fixed_salary)?), None, None)
            }
            Some(SalaryType::Ranged) => {
                if !filled(&self.salary_from) || !filled(&self.salary_to) {
                    return Err(ValidationError::MissingSalaryRange);
                }
                let from = parse_salary(&self.salary_from)?;
                let to = parse_salary(&self.salary_to)?;
                if from > to {
                    return Err(ValidationError::InvertedSalaryRange);
                }
                (None, Some(from), Some(to))
            }
        };

        Ok(NewJobDto {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.clone(),
            country: self.country.trim().to_string(),
            city: self.city.trim().to_string(),
            location: self.location.trim().to_string(),
            fixed_salary,
            salary_from,
            salary_to,
        })
    }
}
