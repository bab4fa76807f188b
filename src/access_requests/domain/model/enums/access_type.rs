use std::str::FromStr;

use super::access_request_domain_error::AccessRequestDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AccessType {
    AzureAdGroup,
    ServicePrincipal,
    RoleAssignment,
    ResourceAccess,
}

impl AccessType {
    pub const ALL: [AccessType; 4] = [
        Self::AzureAdGroup,
        Self::ServicePrincipal,
        Self::RoleAssignment,
        Self::ResourceAccess,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AzureAdGroup => "Azure AD Group",
            Self::ServicePrincipal => "Service Principal",
            Self::RoleAssignment => "Role Assignment",
            Self::ResourceAccess => "Resource Access",
        }
    }
}

impl FromStr for AccessType {
    type Err = AccessRequestDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|access_type| access_type.as_str() == trimmed)
            .ok_or(AccessRequestDomainError::InvalidAccessType)
    }
}
