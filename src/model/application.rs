use serde::{Deserialize, Serialize};

use crate::model::user::Role;

/// Uploaded resume as stored by the backend's file host
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResumeDto {
    #[serde(default)]
    pub public_id: String,
    pub url: String,
}

/// Reference from an application to one of the involved accounts
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplicationPartyDto {
    pub user: String,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(deserialize_with = "super::string_or_number")]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub cover_letter: String,
    pub resume: ResumeDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(rename = "applicantID", default, skip_serializing_if = "Option::is_none")]
    pub applicant: Option<ApplicationPartyDto>,
    #[serde(rename = "employerID", default, skip_serializing_if = "Option::is_none")]
    pub employer: Option<ApplicationPartyDto>,
}
