use async_trait::async_trait;

use crate::access_requests::domain::model::{
    entities::access_request::AccessRequest,
    enums::{
        access_request_domain_error::AccessRequestDomainError,
        access_request_status::AccessRequestStatus,
    },
    value_objects::{
        access_request_decision::AccessRequestDecision, access_request_id::AccessRequestId,
    },
};

/// Result of a conditional status update.
#[derive(Clone, Debug)]
pub enum StatusUpdateOutcome {
    Updated(AccessRequest),
    /// The request exists but had already left `pending`; nothing was written.
    Conflict,
    NotFound,
}

/// Durable store of access requests, listed in insertion order.
///
/// `update_status` is the only mutation after `create` and must check the
/// pending status and write the decision atomically for a single request.
#[async_trait]
pub trait AccessRequestRepository: Send + Sync {
    async fn create(&self, request: &AccessRequest) -> Result<(), AccessRequestDomainError>;

    async fn find_by_id(
        &self,
        id: AccessRequestId,
    ) -> Result<Option<AccessRequest>, AccessRequestDomainError>;

    async fn list(
        &self,
        status: Option<AccessRequestStatus>,
    ) -> Result<Vec<AccessRequest>, AccessRequestDomainError>;

    async fn update_status(
        &self,
        id: AccessRequestId,
        decision: &AccessRequestDecision,
    ) -> Result<StatusUpdateOutcome, AccessRequestDomainError>;
}
