use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categories offered by the post and edit forms
pub const JOB_CATEGORIES: [&str; 10] = [
    "Graphics & Design",
    "Mobile App Development",
    "Frontend Web Development",
    "MERN Stack Development",
    "Account & Finance",
    "Artificial Intelligence",
    "Video Animation",
    "MEAN Stack Development",
    "MEVN Stack Development",
    "Data Entry Operator",
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_from: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_to: Option<f64>,
    #[serde(default)]
    pub expired: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_posted_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_by: Option<String>,
}

/// Salary of a job, either fixed or a from/to range
///
/// The backend stores plain numbers, so amounts may carry decimals; whole amounts
/// display without a fraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Salary {
    Fixed(f64),
    Range { from: Option<f64>, to: Option<f64> },
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Salary::Fixed(amount) => write!(f, "${}", amount),
            Salary::Range { from, to } => {
                write!(f, "${} - ", from.unwrap_or(0.0))?;
                match to {
                    Some(to) => write!(f, "${}", to),
                    None => f.write_str("Negotiable"),
                }
            }
        }
    }
}

/// Editable fields of a posted job
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobField {
    Title,
    Description,
    Category,
    Country,
    City,
    Location,
    FixedSalary,
    SalaryFrom,
    SalaryTo,
}

impl JobDto {
    /// A fixed salary takes precedence over any range bounds
    pub fn salary(&self) -> Salary {
        match self.fixed_salary {
            Some(amount) if amount > 0.0 => Salary::Fixed(amount),
            _ => Salary::Range {
                from: self.salary_from,
                to: self.salary_to,
            },
        }
    }

    /// Apply an edit from a form input
    ///
    /// Salary inputs that do not parse as a non-negative number clear the field.
    pub fn set_field(&mut self, field: JobField, value: &str) {
        let amount = || {
            value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|amount| amount.is_finite() && *amount >= 0.0)
        };

        match field {
            JobField::Title => self.title = value.to_string(),
            JobField::Description => self.description = value.to_string(),
            JobField::Category => self.category = value.to_string(),
            JobField::Country => self.country = value.to_string(),
            JobField::City => self.city = value.to_string(),
            JobField::Location => self.location = value.to_string(),
            JobField::FixedSalary => self.fixed_salary = amount(),
            JobField::SalaryFrom => self.salary_from = amount(),
            JobField::SalaryTo => self.salary_to = amount(),
        }
    }

    /// Posting date as shown on the details page
    pub fn posted_on_label(&self) -> String {
        self.job_posted_on
            .map(|posted| posted.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// Body of `POST /api/v1/job/post`
///
/// Exactly one of the fixed salary or the range is sent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJobDto {
    pub title: String,
    pub description: String,
    pub category: String,
    pub country: String,
    pub city: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_from: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_to: Option<f64>,
}
