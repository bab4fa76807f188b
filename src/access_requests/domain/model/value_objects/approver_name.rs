use crate::access_requests::domain::model::enums::access_request_domain_error::AccessRequestDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ApproverName(String);

impl ApproverName {
    pub const MAX_LENGTH: usize = 120;

    pub fn new(value: String) -> Result<Self, AccessRequestDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(AccessRequestDomainError::InvalidApproverName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
