use chrono::{DateTime, Utc};

use crate::access_requests::domain::model::{
    enums::{
        access_request_domain_error::AccessRequestDomainError,
        access_request_status::AccessRequestStatus, decision_kind::DecisionKind,
    },
    value_objects::{approval_notes::ApprovalNotes, approver_name::ApproverName},
};

/// Outcome recorded on a request when it leaves `pending`.
///
/// Status, approver and timestamp travel together so a stored request either
/// has all of them or none.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessRequestDecision {
    kind: DecisionKind,
    approved_by: ApproverName,
    notes: Option<ApprovalNotes>,
    decided_at: DateTime<Utc>,
}

impl AccessRequestDecision {
    pub fn new(
        kind: DecisionKind,
        approved_by: ApproverName,
        notes: Option<ApprovalNotes>,
        decided_at: DateTime<Utc>,
    ) -> Result<Self, AccessRequestDomainError> {
        if kind == DecisionKind::Reject && notes.is_none() {
            return Err(AccessRequestDomainError::RejectionNotesRequired);
        }
        Ok(Self {
            kind,
            approved_by,
            notes,
            decided_at,
        })
    }

    pub fn status(&self) -> AccessRequestStatus {
        self.kind.target_status()
    }

    pub fn approved_by(&self) -> &ApproverName {
        &self.approved_by
    }

    pub fn notes(&self) -> Option<&ApprovalNotes> {
        self.notes.as_ref()
    }

    pub fn decided_at(&self) -> DateTime<Utc> {
        self.decided_at
    }
}
