use async_trait::async_trait;

use crate::access_requests::domain::model::{
    commands::{
        decide_access_request_command::DecideAccessRequestCommand,
        submit_access_request_command::SubmitAccessRequestCommand,
    },
    entities::access_request::AccessRequest,
    enums::access_request_domain_error::AccessRequestDomainError,
};

#[async_trait]
pub trait AccessRequestCommandService: Send + Sync {
    async fn handle_submit(
        &self,
        command: SubmitAccessRequestCommand,
    ) -> Result<AccessRequest, AccessRequestDomainError>;

    async fn handle_decide(
        &self,
        command: DecideAccessRequestCommand,
    ) -> Result<AccessRequest, AccessRequestDomainError>;
}
