use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessRequestDomainError {
    #[error("name is required and must be at most 100 characters")]
    InvalidRequesterName,

    #[error(
        "email is invalid; expected an address like user@example.com, at most 120 characters"
    )]
    InvalidRequesterEmail,

    #[error(
        "access type is invalid; use one of: Azure AD Group, Service Principal, Role Assignment, Resource Access"
    )]
    InvalidAccessType,

    #[error("approved_by is required and must be at most 120 characters")]
    InvalidApproverName,

    #[error("notes are required when rejecting a request")]
    RejectionNotesRequired,

    #[error("status filter is invalid; use pending, approved or rejected")]
    InvalidStatusFilter,

    #[error("access request not found")]
    AccessRequestNotFound,

    #[error("access request is no longer pending")]
    InvalidStatusTransition,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}

impl AccessRequestDomainError {
    /// Input field the error refers to, for inline error rendering.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidRequesterName => Some("name"),
            Self::InvalidRequesterEmail => Some("email"),
            Self::InvalidAccessType => Some("access_type"),
            Self::InvalidApproverName => Some("approved_by"),
            Self::RejectionNotesRequired => Some("notes"),
            Self::InvalidStatusFilter => Some("status"),
            Self::AccessRequestNotFound
            | Self::InvalidStatusTransition
            | Self::InfrastructureError(_) => None,
        }
    }

    pub fn is_validation_error(&self) -> bool {
        self.field().is_some()
    }
}
