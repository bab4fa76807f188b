use std::sync::Arc;

use axum::Router;
use sqlx::{migrate, postgres::PgPoolOptions};
use tracing::info;

use crate::{
    access_requests::{
        application::{
            command_services::access_request_command_service_impl::AccessRequestCommandServiceImpl,
            query_services::access_request_query_service_impl::AccessRequestQueryServiceImpl,
        },
        infrastructure::persistence::repositories::{
            access_request_repository::AccessRequestRepository,
            in_memory::in_memory_access_request_repository_impl::InMemoryAccessRequestRepositoryImpl,
            postgres::sqlx_access_request_repository_impl::SqlxAccessRequestRepositoryImpl,
        },
        interfaces::rest::controllers::access_request_rest_controller::{
            AccessRequestRestControllerState, router,
        },
    },
    config::app_config::AppConfig,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_access_requests_router(config: &AppConfig) -> Result<Router, String> {
    let repository = build_access_request_repository(config).await?;
    Ok(access_requests_router(repository))
}

pub fn access_requests_router(repository: Arc<dyn AccessRequestRepository>) -> Router {
    let command_service = Arc::new(AccessRequestCommandServiceImpl::new(repository.clone()));
    let query_service = Arc::new(AccessRequestQueryServiceImpl::new(repository));

    router(AccessRequestRestControllerState {
        command_service,
        query_service,
    })
}

async fn build_access_request_repository(
    config: &AppConfig,
) -> Result<Arc<dyn AccessRequestRepository>, String> {
    let Some(database_url) = config.database_url.as_deref() else {
        info!("DATABASE_URL not set; access requests are kept in memory");
        return Ok(Arc::new(InMemoryAccessRequestRepositoryImpl::new()));
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(database_url)
        .await
        .map_err(|e| e.to_string())?;

    migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| e.to_string())?;

    info!("access requests are stored in PostgreSQL");
    Ok(Arc::new(SqlxAccessRequestRepositoryImpl::new(pool)))
}
