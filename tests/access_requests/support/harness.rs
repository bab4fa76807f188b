use std::sync::Arc;

use iam_access_portal::access_requests::{
    application::{
        command_services::access_request_command_service_impl::AccessRequestCommandServiceImpl,
        query_services::access_request_query_service_impl::AccessRequestQueryServiceImpl,
    },
    domain::model::entities::access_request::AccessRequest,
    infrastructure::persistence::repositories::{
        access_request_repository::AccessRequestRepository,
        in_memory::in_memory_access_request_repository_impl::InMemoryAccessRequestRepositoryImpl,
    },
    interfaces::rest::controllers::access_request_rest_controller::AccessRequestRestControllerState,
};

pub struct AccessRequestTestHarness {
    pub repository: Arc<dyn AccessRequestRepository>,
    pub command_service: Arc<AccessRequestCommandServiceImpl>,
    pub query_service: Arc<AccessRequestQueryServiceImpl>,
}

impl AccessRequestTestHarness {
    pub fn controller_state(&self) -> AccessRequestRestControllerState {
        AccessRequestRestControllerState {
            command_service: self.command_service.clone(),
            query_service: self.query_service.clone(),
        }
    }
}

pub fn create_harness(entries: Vec<AccessRequest>) -> AccessRequestTestHarness {
    create_harness_with_repository(Arc::new(InMemoryAccessRequestRepositoryImpl::with_entries(
        entries,
    )))
}

pub fn create_harness_with_repository(
    repository: Arc<dyn AccessRequestRepository>,
) -> AccessRequestTestHarness {
    let command_service = Arc::new(AccessRequestCommandServiceImpl::new(repository.clone()));
    let query_service = Arc::new(AccessRequestQueryServiceImpl::new(repository.clone()));

    AccessRequestTestHarness {
        repository,
        command_service,
        query_service,
    }
}
