use crate::access_requests::domain::model::enums::{
    access_request_domain_error::AccessRequestDomainError,
    access_request_status::AccessRequestStatus,
};

#[derive(Clone, Debug, Default)]
pub struct ListAccessRequestsQuery {
    status: Option<AccessRequestStatus>,
}

impl ListAccessRequestsQuery {
    pub fn new(status: Option<String>) -> Result<Self, AccessRequestDomainError> {
        let status: Option<AccessRequestStatus> = match status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse()?),
        };
        Ok(Self { status })
    }

    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(status: AccessRequestStatus) -> Self {
        Self {
            status: Some(status),
        }
    }

    pub fn status(&self) -> Option<AccessRequestStatus> {
        self.status
    }
}
