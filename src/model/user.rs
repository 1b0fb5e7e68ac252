use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two account roles gating which views and actions are reachable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Employer")]
    Employer,
    #[serde(rename = "Job Seeker")]
    JobSeeker,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Employer, Role::JobSeeker];

    /// Wire and display name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employer => "Employer",
            Role::JobSeeker => "Job Seeker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("Unknown role: {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "super::string_or_number")]
    pub phone: String,
    pub role: Role,
}

/// Body of `POST /api/v1/user/login`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Body of `POST /api/v1/user/register`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
}
