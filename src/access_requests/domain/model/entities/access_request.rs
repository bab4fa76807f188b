use chrono::{DateTime, Utc};

use crate::access_requests::domain::model::{
    enums::{
        access_request_domain_error::AccessRequestDomainError,
        access_request_status::AccessRequestStatus, access_type::AccessType,
    },
    value_objects::{
        access_request_decision::AccessRequestDecision, access_request_id::AccessRequestId,
        approval_notes::ApprovalNotes, approver_name::ApproverName, justification::Justification,
        requester_email::RequesterEmail, requester_name::RequesterName,
    },
};

#[derive(Clone, Debug)]
pub struct AccessRequest {
    id: AccessRequestId,
    name: RequesterName,
    email: RequesterEmail,
    access_type: AccessType,
    justification: Justification,
    created_at: DateTime<Utc>,
    decision: Option<AccessRequestDecision>,
}

pub struct AccessRequestRestoreParts {
    pub id: AccessRequestId,
    pub name: RequesterName,
    pub email: RequesterEmail,
    pub access_type: AccessType,
    pub justification: Justification,
    pub created_at: DateTime<Utc>,
    pub decision: Option<AccessRequestDecision>,
}

impl AccessRequest {
    pub fn new_pending(
        name: RequesterName,
        email: RequesterEmail,
        access_type: AccessType,
        justification: Justification,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AccessRequestId::new_random(),
            name,
            email,
            access_type,
            justification,
            created_at,
            decision: None,
        }
    }

    pub fn restore(parts: AccessRequestRestoreParts) -> Self {
        Self {
            id: parts.id,
            name: parts.name,
            email: parts.email,
            access_type: parts.access_type,
            justification: parts.justification,
            created_at: parts.created_at,
            decision: parts.decision,
        }
    }

    pub fn ensure_pending(&self) -> Result<(), AccessRequestDomainError> {
        if self.status() != AccessRequestStatus::Pending {
            return Err(AccessRequestDomainError::InvalidStatusTransition);
        }
        Ok(())
    }

    /// Moves the request out of `pending`. A decided request is never modified again.
    pub fn apply_decision(
        &mut self,
        decision: AccessRequestDecision,
    ) -> Result<(), AccessRequestDomainError> {
        self.ensure_pending()?;
        self.decision = Some(decision);
        Ok(())
    }

    pub fn id(&self) -> AccessRequestId {
        self.id
    }

    pub fn name(&self) -> &RequesterName {
        &self.name
    }

    pub fn email(&self) -> &RequesterEmail {
        &self.email
    }

    pub fn access_type(&self) -> AccessType {
        self.access_type
    }

    pub fn justification(&self) -> &Justification {
        &self.justification
    }

    pub fn status(&self) -> AccessRequestStatus {
        self.decision
            .as_ref()
            .map(AccessRequestDecision::status)
            .unwrap_or(AccessRequestStatus::Pending)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.decided_at().unwrap_or(self.created_at)
    }

    pub fn approved_by(&self) -> Option<&ApproverName> {
        self.decision.as_ref().map(AccessRequestDecision::approved_by)
    }

    pub fn approval_notes(&self) -> Option<&ApprovalNotes> {
        self.decision.as_ref().and_then(AccessRequestDecision::notes)
    }

    pub fn decided_at(&self) -> Option<DateTime<Utc>> {
        self.decision.as_ref().map(AccessRequestDecision::decided_at)
    }
}
