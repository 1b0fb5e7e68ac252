use std::str::FromStr;

use crate::{
    client::{error::ValidationError, form::filled},
    model::user::{LoginDto, RegisterDto, Role},
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    /// Raw value of the role select, empty until one is picked
    pub role: String,
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginDto, ValidationError> {
        let role = Role::from_str(&self.role).map_err(|_| ValidationError::MissingFields)?;
        if !filled(&self.email) || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(LoginDto {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub role: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterDto, ValidationError> {
        let role = Role::from_str(&self.role).map_err(|_| ValidationError::MissingFields)?;
        if ![&self.name, &self.email, &self.phone]
            .iter()
            .all(|value| filled(value))
            || self.password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }

        Ok(RegisterDto {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password.clone(),
            role,
        })
    }
}
