use std::fmt;

use uuid::Uuid;

use crate::access_requests::domain::model::enums::access_request_domain_error::AccessRequestDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AccessRequestId(Uuid);

impl AccessRequestId {
    /// Malformed identifiers cannot name a stored request, so they are reported as not found.
    pub fn new(value: String) -> Result<Self, AccessRequestDomainError> {
        let parsed = Uuid::parse_str(value.trim())
            .map_err(|_| AccessRequestDomainError::AccessRequestNotFound)?;
        Ok(Self(parsed))
    }

    pub fn new_random() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for AccessRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
