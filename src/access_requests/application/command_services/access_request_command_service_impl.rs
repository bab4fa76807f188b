use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, warn};

use crate::access_requests::{
    domain::{
        model::{
            commands::{
                decide_access_request_command::DecideAccessRequestCommand,
                submit_access_request_command::SubmitAccessRequestCommand,
            },
            entities::access_request::AccessRequest,
            enums::access_request_domain_error::AccessRequestDomainError,
            value_objects::access_request_decision::AccessRequestDecision,
        },
        services::access_request_command_service::AccessRequestCommandService,
    },
    infrastructure::persistence::repositories::access_request_repository::{
        AccessRequestRepository, StatusUpdateOutcome,
    },
};

pub struct AccessRequestCommandServiceImpl {
    access_request_repository: Arc<dyn AccessRequestRepository>,
}

impl AccessRequestCommandServiceImpl {
    pub fn new(access_request_repository: Arc<dyn AccessRequestRepository>) -> Self {
        Self {
            access_request_repository,
        }
    }
}

#[async_trait]
impl AccessRequestCommandService for AccessRequestCommandServiceImpl {
    async fn handle_submit(
        &self,
        command: SubmitAccessRequestCommand,
    ) -> Result<AccessRequest, AccessRequestDomainError> {
        let request = AccessRequest::new_pending(
            command.name().clone(),
            command.email().clone(),
            command.access_type(),
            command.justification().clone(),
            Utc::now(),
        );

        if let Err(error) = self.access_request_repository.create(&request).await {
            error!(request_id = %request.id(), %error, "failed to store access request");
            return Err(error);
        }

        info!(
            request_id = %request.id(),
            access_type = request.access_type().as_str(),
            "access request submitted"
        );

        Ok(request)
    }

    async fn handle_decide(
        &self,
        command: DecideAccessRequestCommand,
    ) -> Result<AccessRequest, AccessRequestDomainError> {
        let request_id = command.request_id();

        let current = self
            .access_request_repository
            .find_by_id(request_id)
            .await?
            .ok_or(AccessRequestDomainError::AccessRequestNotFound)?;

        if let Err(error) = current.ensure_pending() {
            warn!(
                %request_id,
                status = current.status().as_str(),
                decision = command.kind().as_str(),
                "decision rejected; request already decided"
            );
            return Err(error);
        }

        let decision = AccessRequestDecision::new(
            command.kind(),
            command.approved_by().clone(),
            command.notes().cloned(),
            Utc::now(),
        )?;

        let outcome = self
            .access_request_repository
            .update_status(request_id, &decision)
            .await
            .inspect_err(|error| {
                error!(%request_id, %error, "failed to record access request decision");
            })?;

        match outcome {
            StatusUpdateOutcome::Updated(updated) => {
                info!(
                    %request_id,
                    status = updated.status().as_str(),
                    approved_by = decision.approved_by().value(),
                    "access request decided"
                );
                Ok(updated)
            }
            StatusUpdateOutcome::Conflict => {
                warn!(
                    %request_id,
                    decision = command.kind().as_str(),
                    "decision lost race against a concurrent decision"
                );
                Err(AccessRequestDomainError::InvalidStatusTransition)
            }
            StatusUpdateOutcome::NotFound => Err(AccessRequestDomainError::AccessRequestNotFound),
        }
    }
}
