use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Request DTO for submitting a new student registration.
///
/// The ledger assigns the id and starts the record at `pending`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct SubmitRegistrationRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Student name is required"))
    )]
    pub name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requesting_teacher_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Class label must not be empty"))
    )]
    pub class_name: Option<String>,
}
