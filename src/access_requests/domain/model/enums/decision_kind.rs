use super::access_request_status::AccessRequestStatus;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecisionKind {
    Approve,
    Reject,
}

impl DecisionKind {
    pub fn target_status(&self) -> AccessRequestStatus {
        match self {
            Self::Approve => AccessRequestStatus::Approved,
            Self::Reject => AccessRequestStatus::Rejected,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}
