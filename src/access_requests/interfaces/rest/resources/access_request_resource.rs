use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::access_requests::domain::model::entities::access_request::AccessRequest;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AccessRequestResource {
    pub id: String,
    pub name: String,
    pub email: String,
    pub access_type: String,
    pub justification: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub approved_by: Option<String>,
    pub approval_notes: Option<String>,
}

impl From<AccessRequest> for AccessRequestResource {
    fn from(request: AccessRequest) -> Self {
        Self {
            id: request.id().to_string(),
            name: request.name().value().to_string(),
            email: request.email().value().to_string(),
            access_type: request.access_type().as_str().to_string(),
            justification: request.justification().value().to_string(),
            status: request.status().as_str().to_string(),
            created_at: request.created_at().to_rfc3339(),
            updated_at: request.updated_at().to_rfc3339(),
            approved_by: request.approved_by().map(|name| name.value().to_string()),
            approval_notes: request
                .approval_notes()
                .map(|notes| notes.value().to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AccessRequestListResource {
    pub requests: Vec<AccessRequestResource>,
    pub total: usize,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct ListAccessRequestsQueryResource {
    pub status: Option<String>,
}
