use std::sync::Arc;

use async_trait::async_trait;

use crate::access_requests::{
    domain::{
        model::{
            entities::access_request::AccessRequest,
            enums::access_request_domain_error::AccessRequestDomainError,
            queries::{
                get_access_request_query::GetAccessRequestQuery,
                list_access_requests_query::ListAccessRequestsQuery,
            },
        },
        services::access_request_query_service::AccessRequestQueryService,
    },
    infrastructure::persistence::repositories::access_request_repository::AccessRequestRepository,
};

pub struct AccessRequestQueryServiceImpl {
    access_request_repository: Arc<dyn AccessRequestRepository>,
}

impl AccessRequestQueryServiceImpl {
    pub fn new(access_request_repository: Arc<dyn AccessRequestRepository>) -> Self {
        Self {
            access_request_repository,
        }
    }
}

#[async_trait]
impl AccessRequestQueryService for AccessRequestQueryServiceImpl {
    async fn handle_list(
        &self,
        query: ListAccessRequestsQuery,
    ) -> Result<Vec<AccessRequest>, AccessRequestDomainError> {
        self.access_request_repository.list(query.status()).await
    }

    async fn handle_get(
        &self,
        query: GetAccessRequestQuery,
    ) -> Result<AccessRequest, AccessRequestDomainError> {
        self.access_request_repository
            .find_by_id(query.request_id())
            .await?
            .ok_or(AccessRequestDomainError::AccessRequestNotFound)
    }
}
