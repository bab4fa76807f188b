use async_trait::async_trait;

use crate::access_requests::domain::model::{
    entities::access_request::AccessRequest,
    enums::access_request_domain_error::AccessRequestDomainError,
    queries::{
        get_access_request_query::GetAccessRequestQuery,
        list_access_requests_query::ListAccessRequestsQuery,
    },
};

#[async_trait]
pub trait AccessRequestQueryService: Send + Sync {
    async fn handle_list(
        &self,
        query: ListAccessRequestsQuery,
    ) -> Result<Vec<AccessRequest>, AccessRequestDomainError>;

    async fn handle_get(
        &self,
        query: GetAccessRequestQuery,
    ) -> Result<AccessRequest, AccessRequestDomainError>;
}
