use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::access_requests::{
    domain::model::value_objects::approver_name::ApproverName,
    interfaces::rest::resources::submit_access_request_request_resource::to_validation_error,
};

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(default)]
pub struct DecideAccessRequestRequestResource {
    #[validate(custom(function = "validate_approver_name"))]
    pub approved_by: String,
    pub notes: Option<String>,
}

fn validate_approver_name(value: &str) -> Result<(), ValidationError> {
    ApproverName::new(value.to_string())
        .map(|_| ())
        .map_err(to_validation_error)
}
