use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::access_requests::domain::model::{
    enums::{access_request_domain_error::AccessRequestDomainError, access_type::AccessType},
    value_objects::{requester_email::RequesterEmail, requester_name::RequesterName},
};

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(default)]
pub struct SubmitAccessRequestRequestResource {
    #[validate(custom(function = "validate_requester_name"))]
    pub name: String,
    #[validate(custom(function = "validate_requester_email"))]
    pub email: String,
    #[schema(example = "Role Assignment")]
    #[validate(custom(function = "validate_access_type"))]
    pub access_type: String,
    pub justification: Option<String>,
}

// Field checks defer to the domain value objects so HTTP and domain rules cannot drift.
fn validate_requester_name(value: &str) -> Result<(), ValidationError> {
    RequesterName::new(value.to_string())
        .map(|_| ())
        .map_err(to_validation_error)
}

fn validate_requester_email(value: &str) -> Result<(), ValidationError> {
    RequesterEmail::new(value.to_string())
        .map(|_| ())
        .map_err(to_validation_error)
}

fn validate_access_type(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<AccessType>()
        .map(|_| ())
        .map_err(to_validation_error)
}

pub(crate) fn to_validation_error(error: AccessRequestDomainError) -> ValidationError {
    ValidationError::new("invalid").with_message(error.to_string().into())
}
