use crate::access_requests::domain::model::{
    enums::{
        access_request_domain_error::AccessRequestDomainError, decision_kind::DecisionKind,
    },
    value_objects::{
        access_request_id::AccessRequestId, approval_notes::ApprovalNotes,
        approver_name::ApproverName,
    },
};

#[derive(Clone, Debug)]
pub struct DecideAccessRequestCommand {
    request_id: AccessRequestId,
    kind: DecisionKind,
    approved_by: ApproverName,
    notes: Option<ApprovalNotes>,
}

impl DecideAccessRequestCommand {
    /// Decision fields are checked before the identifier, so a rejection
    /// without notes is a validation failure whatever the target.
    pub fn new(
        request_id: String,
        kind: DecisionKind,
        approved_by: String,
        notes: Option<String>,
    ) -> Result<Self, AccessRequestDomainError> {
        let notes = ApprovalNotes::new(notes);
        if kind == DecisionKind::Reject && notes.is_none() {
            return Err(AccessRequestDomainError::RejectionNotesRequired);
        }
        let approved_by = ApproverName::new(approved_by)?;

        Ok(Self {
            request_id: AccessRequestId::new(request_id)?,
            kind,
            approved_by,
            notes,
        })
    }

    pub fn request_id(&self) -> AccessRequestId {
        self.request_id
    }

    pub fn kind(&self) -> DecisionKind {
        self.kind
    }

    pub fn approved_by(&self) -> &ApproverName {
        &self.approved_by
    }

    pub fn notes(&self) -> Option<&ApprovalNotes> {
        self.notes.as_ref()
    }
}
