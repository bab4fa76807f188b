use std::str::FromStr;

use super::access_request_domain_error::AccessRequestDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AccessRequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl AccessRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl FromStr for AccessRequestStatus {
    type Err = AccessRequestDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(AccessRequestDomainError::InvalidStatusFilter),
        }
    }
}
